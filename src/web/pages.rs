use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tower_sessions::Session;

use super::auth::page_context;
use super::error::PageError;
use super::{AppState, render};

/// GET /space — static render
pub async fn space(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let ctx = page_context(&session, &state).await?;
    Ok(Html(render::space_page(&ctx)))
}

/// Router fallback: every unknown route gets the 404 page
pub async fn not_found() -> Response {
    PageError::NotFound.into_response()
}
