//! Fixture data command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_forge(config: &Config) -> anyhow::Result<()> {
    // Store::new ensures the schema exists before seeding
    let store = Store::new(&config.database_url()).await?;
    store.seed_fixtures().await?;

    println!("Done.");
    Ok(())
}
