//! Landing page, health endpoint, and router fallback

use askama::Template;
use axum::response::{Html, Response};
use axum::Json;
use serde::Serialize;

use crate::api::error::{not_found_page, PageError};
use crate::templates::HomeTemplate;

/// GET /
pub async fn home() -> Result<Html<String>, PageError> {
    render_home(None)
}

/// Render the landing page, optionally with a flash message.
///
/// Mutation handlers land here after a create or delete (HTTP 200 with the
/// outcome message embedded, per the directory's flash behavior).
pub(crate) fn render_home(flash: Option<String>) -> Result<Html<String>, PageError> {
    Ok(Html(HomeTemplate { flash }.render()?))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "stagefront-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Router fallback: dedicated 404 page
pub async fn not_found() -> Response {
    not_found_page()
}
