use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::auth::{current_user, page_context};
use super::error::PageError;
use super::flash::flash;
use super::form::PageForm;
use super::validation::valid_display_name;
use super::{AppState, render};

#[derive(Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub name: String,
}

/// GET /settings (login required)
pub async fn page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, PageError> {
    let Some(user) = current_user(&session, &state).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let ctx = page_context(&session, &state).await?;
    Ok(Html(render::settings_page(&ctx, &user.name)).into_response())
}

/// POST /settings (login required)
pub async fn update(
    State(state): State<Arc<AppState>>,
    session: Session,
    PageForm(form): PageForm<SettingsForm>,
) -> Result<Response, PageError> {
    let Some(user) = current_user(&session, &state).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    if !valid_display_name(&form.name) {
        flash(&session, "Invalid input.").await?;
        return Ok(Redirect::to("/settings").into_response());
    }

    state.store().update_user_name(user.id, &form.name).await?;
    flash(&session, "Settings updated.").await?;
    Ok(Redirect::to("/").into_response())
}
