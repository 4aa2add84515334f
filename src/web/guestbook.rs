use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::auth::page_context;
use super::error::PageError;
use super::flash::flash;
use super::form::PageForm;
use super::validation::valid_message_input;
use super::{AppState, render};

#[derive(Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// GET /message — open to anonymous visitors
pub async fn page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let ctx = page_context(&session, &state).await?;
    let messages = state.store().list_messages().await?;
    Ok(Html(render::guestbook_page(&ctx, &messages)))
}

/// POST /message — open to anonymous visitors
pub async fn create(
    State(state): State<Arc<AppState>>,
    session: Session,
    PageForm(form): PageForm<MessageForm>,
) -> Result<Response, PageError> {
    if !valid_message_input(&form.name, &form.content) {
        flash(&session, "Invalid input.").await?;
        return Ok(Redirect::to("/message").into_response());
    }

    state
        .store()
        .create_message(&form.name, &form.content)
        .await?;
    flash(&session, "Message created.").await?;
    Ok(Redirect::to("/message").into_response())
}
