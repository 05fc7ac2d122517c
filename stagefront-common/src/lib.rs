//! # Stagefront Common Library
//!
//! Shared code for the Stagefront booking directory:
//! - Database schema and row models
//! - Genre tag codec (comma-joined storage form)
//! - Show timestamp formatting and parsing
//! - Common error type

pub mod db;
pub mod error;
pub mod genres;
pub mod time;

pub use error::{Error, Result};
