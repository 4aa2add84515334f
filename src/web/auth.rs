use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::error::PageError;
use super::flash::{flash, take_flashes};
use super::form::PageForm;
use super::{AppState, render};
use crate::db::User;

/// Session key holding the authenticated user's id
const SESSION_USER_KEY: &str = "user_id";

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Resolve the session identity to a user. A stale id (e.g. after a
/// database reset) counts as anonymous.
pub async fn current_user(
    session: &Session,
    state: &AppState,
) -> Result<Option<User>, PageError> {
    let Some(user_id) = session.get::<i32>(SESSION_USER_KEY).await? else {
        return Ok(None);
    };
    Ok(state.store().user_by_id(user_id).await?)
}

/// Build the context a rendered page needs, draining queued flashes.
/// Only call from handlers that actually render.
pub async fn page_context(
    session: &Session,
    state: &AppState,
) -> Result<render::PageContext, PageError> {
    let logged_in = current_user(session, state).await?.is_some();
    let owner = state.store().first_user().await?;
    let flashes = take_flashes(session).await?;

    Ok(render::PageContext {
        owner_name: owner.map(|user| user.name),
        logged_in,
        flashes,
    })
}

/// GET /login
pub async fn login_page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let ctx = page_context(&session, &state).await?;
    Ok(Html(render::login_page(&ctx)))
}

/// POST /login
/// The failure notice is identical for a wrong username and a wrong
/// password.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    PageForm(form): PageForm<LoginForm>,
) -> Result<Response, PageError> {
    if form.username.is_empty() || form.password.is_empty() {
        flash(&session, "Invalid input.").await?;
        return Ok(Redirect::to("/login").into_response());
    }

    match state
        .store()
        .verify_login(&form.username, &form.password)
        .await?
    {
        Some(user) => {
            session.insert(SESSION_USER_KEY, user.id).await?;
            flash(&session, "Login success.").await?;
            tracing::info!(username = %user.username, "Login success");
            Ok(Redirect::to("/").into_response())
        }
        None => {
            flash(&session, "Invalid username or password.").await?;
            tracing::warn!(username = %form.username, "Failed login attempt");
            Ok(Redirect::to("/login").into_response())
        }
    }
}

/// GET /logout (login required)
pub async fn logout(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, PageError> {
    if current_user(&session, &state).await?.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }

    let _ = session.remove::<i32>(SESSION_USER_KEY).await?;
    flash(&session, "Goodbye.").await?;
    Ok(Redirect::to("/").into_response())
}
