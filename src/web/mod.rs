use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::db::Store;

pub mod auth;
mod error;
mod flash;
mod form;
mod guestbook;
mod movies;
mod pages;
pub mod render;
mod settings;
mod validation;

pub use error::PageError;
pub use form::PageForm;

#[derive(Clone)]
pub struct AppState {
    config: Config,
    store: Store,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::new(&config.database_url()).await?;
    Ok(Arc::new(AppState { config, store }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(60)));

    Router::new()
        .route("/", get(movies::index).post(movies::create))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/settings", get(settings::page).post(settings::update))
        .route(
            "/movie/edit/{id}",
            get(movies::edit_page).post(movies::update),
        )
        .route("/movie/delete/{id}", post(movies::delete))
        .route("/message", get(guestbook::page).post(guestbook::create))
        .route("/space", get(pages::space))
        .fallback(pages::not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
