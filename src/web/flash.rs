//! One-shot flash notices queued against the session and drained on the
//! next rendered page.

use tower_sessions::Session;

use super::error::PageError;

const FLASH_KEY: &str = "_flashes";

/// Queue a notice for the next rendered response
pub async fn flash(session: &Session, message: &str) -> Result<(), PageError> {
    let mut queued: Vec<String> = session.get(FLASH_KEY).await?.unwrap_or_default();
    queued.push(message.to_string());
    session.insert(FLASH_KEY, queued).await?;
    Ok(())
}

/// Drain all queued notices; they are shown exactly once
pub async fn take_flashes(session: &Session) -> Result<Vec<String>, PageError> {
    Ok(session.remove(FLASH_KEY).await?.unwrap_or_default())
}
