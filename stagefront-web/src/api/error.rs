//! Page-level error handling
//!
//! Handlers return `PageError`; a missing record renders the dedicated
//! 404 page, anything else the 500 page. Diagnostic detail goes to the
//! log at conversion time and never into the response body.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::templates::{NotFoundTemplate, ServerErrorTemplate};

#[derive(Debug)]
pub enum PageError {
    NotFound,
    Internal,
}

impl From<stagefront_common::Error> for PageError {
    fn from(err: stagefront_common::Error) -> Self {
        match err {
            stagefront_common::Error::NotFound(_) => PageError::NotFound,
            err => {
                error!("request failed: {err}");
                PageError::Internal
            }
        }
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        error!("template render failed: {err}");
        PageError::Internal
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => not_found_page(),
            PageError::Internal => {
                let body = ServerErrorTemplate {}
                    .render()
                    .unwrap_or_else(|_| "500 Server error".to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}

/// Render the dedicated 404 page (also used as the router fallback)
pub fn not_found_page() -> Response {
    let body = NotFoundTemplate {}
        .render()
        .unwrap_or_else(|_| "404 Not found".to_string());
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}
