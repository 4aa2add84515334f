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
use super::form::{PageForm, PagePath};
use super::validation::valid_movie_input;
use super::{AppState, render};

#[derive(Deserialize)]
pub struct MovieForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
}

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let ctx = page_context(&session, &state).await?;
    let movies = state.store().list_movies().await?;
    Ok(Html(render::index_page(&ctx, &movies)))
}

/// POST /
/// Anonymous submissions are silently redirected without a notice.
pub async fn create(
    State(state): State<Arc<AppState>>,
    session: Session,
    PageForm(form): PageForm<MovieForm>,
) -> Result<Response, PageError> {
    if current_user(&session, &state).await?.is_none() {
        return Ok(Redirect::to("/").into_response());
    }

    if !valid_movie_input(&form.title, &form.year) {
        flash(&session, "Invalid input.").await?;
        return Ok(Redirect::to("/").into_response());
    }

    state.store().create_movie(&form.title, &form.year).await?;
    flash(&session, "Item created.").await?;
    Ok(Redirect::to("/").into_response())
}

/// GET /movie/edit/{id} (login required)
pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    session: Session,
    PagePath(id): PagePath<i32>,
) -> Result<Response, PageError> {
    if current_user(&session, &state).await?.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }

    let movie = state
        .store()
        .get_movie(id)
        .await?
        .ok_or(PageError::NotFound)?;

    let ctx = page_context(&session, &state).await?;
    Ok(Html(render::edit_page(&ctx, &movie)).into_response())
}

/// POST /movie/edit/{id} (login required)
pub async fn update(
    State(state): State<Arc<AppState>>,
    session: Session,
    PagePath(id): PagePath<i32>,
    PageForm(form): PageForm<MovieForm>,
) -> Result<Response, PageError> {
    if current_user(&session, &state).await?.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }

    // resolve the id before looking at the form, like the edit page does
    if state.store().get_movie(id).await?.is_none() {
        return Err(PageError::NotFound);
    }

    if !valid_movie_input(&form.title, &form.year) {
        flash(&session, "Invalid input.").await?;
        return Ok(Redirect::to(&format!("/movie/edit/{id}")).into_response());
    }

    state
        .store()
        .update_movie(id, &form.title, &form.year)
        .await?
        .ok_or(PageError::NotFound)?;

    flash(&session, "Item updated.").await?;
    Ok(Redirect::to("/").into_response())
}

/// POST /movie/delete/{id} (login required)
pub async fn delete(
    State(state): State<Arc<AppState>>,
    session: Session,
    PagePath(id): PagePath<i32>,
) -> Result<Response, PageError> {
    if current_user(&session, &state).await?.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }

    if !state.store().delete_movie(id).await? {
        return Err(PageError::NotFound);
    }

    flash(&session, "Item deleted.").await?;
    Ok(Redirect::to("/").into_response())
}
