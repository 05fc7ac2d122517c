//! Database row models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A performance location, as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    /// Comma-joined tag string; split via `crate::genres`
    pub genres: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// A performer, as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub genres: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// A booking of one artist at one venue at a specific time
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub artist_id: i64,
    pub venue_id: i64,
}
