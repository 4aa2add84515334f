pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod web;

use anyhow::Context;
use clap::Parser;
pub use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, cmd_admin, cmd_forge, cmd_initdb};

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Serve) => serve(config).await,
        Some(Commands::Initdb { drop }) => cmd_initdb(&config, drop).await,
        Some(Commands::Forge) => cmd_forge(&config).await,
        Some(Commands::Admin { username, password }) => {
            cmd_admin(&config, &username, &password).await
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = web::create_app_state_from_config(config).await?;
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
