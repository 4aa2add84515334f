//! Admin account command handler

use crate::config::Config;
use crate::db::{AdminUpsert, Store};

pub async fn cmd_admin(config: &Config, username: &str, password: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.database_url()).await?;

    match store.upsert_admin(username, password).await? {
        AdminUpsert::Created => println!("Creating user..."),
        AdminUpsert::Updated => println!("Updating user..."),
    }

    println!("Done.");
    Ok(())
}
