//! stagefront-web library
//!
//! Server-rendered booking directory for music venues, artists, and
//! shows. The router maps each verb+path to a handler in `api`, which
//! reads through `views` or writes through `mutations`.

use axum::Router;
use sqlx::SqlitePool;

pub mod api;
pub mod forms;
pub mod mutations;
pub mod templates;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::pages::home))
        .route("/health", get(api::pages::health_check))
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::new_venue_form).post(api::venues::create_venue),
        )
        .route("/venues/:id", get(api::venues::venue_detail))
        .route(
            "/venues/:id/edit",
            get(api::venues::edit_venue_form).post(api::venues::update_venue),
        )
        .route("/venues/:id/delete", post(api::venues::delete_venue))
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::new_artist_form).post(api::artists::create_artist),
        )
        .route("/artists/:id", get(api::artists::artist_detail))
        .route(
            "/artists/:id/edit",
            get(api::artists::edit_artist_form).post(api::artists::update_artist),
        )
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::new_show_form).post(api::shows::create_show),
        )
        .fallback(api::pages::not_found)
        .with_state(state)
}
