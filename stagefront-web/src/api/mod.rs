//! HTTP handlers for stagefront-web

pub mod artists;
pub mod error;
pub mod pages;
pub mod shows;
pub mod venues;

pub use error::PageError;

/// Translate a redirect flash token into the user-facing message.
///
/// Edit success redirects carry `?flash=updated`; the detail handler turns
/// that into the message using the freshly loaded record's name, so no
/// free text travels through the URL.
pub(crate) fn flash_message(token: Option<&str>, name: &str) -> Option<String> {
    match token {
        Some("updated") => Some(format!("{name} was successfully updated!")),
        Some("update_failed") => Some(format!("Error: {name} could not be updated!")),
        _ => None,
    }
}

/// Query parameters accepted by the detail pages
#[derive(Debug, serde::Deserialize)]
pub struct FlashParams {
    pub flash: Option<String>,
}
