//! Initialize the database command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_initdb(config: &Config, drop: bool) -> anyhow::Result<()> {
    let store = Store::new(&config.database_url()).await?;
    store.init_schema(drop).await?;

    println!("Initialized database.");
    Ok(())
}
