//! Form payloads and server-side validation
//!
//! Raw form structs deserialize straight from the urlencoded POST body;
//! `validated()` checks them field by field and produces the typed payload
//! the mutation layer accepts. Checkboxes arrive as a present-or-absent
//! field, so the seeking flags are `Option<String>` until validation.
//!
//! Phone numbers and URLs are accepted as free text; format checking is
//! the form front-end's job.

use chrono::NaiveDateTime;
use serde::Deserialize;
use stagefront_common::time::parse_show_time;

/// Accepted region codes for the state field
pub const STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Validated venue payload, ready for insert or full-record update
#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// Validated artist payload
#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// Validated show payload
#[derive(Debug, Clone)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// Raw venue form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    /// Comma-joined genre selection
    #[serde(default)]
    pub genres: String,
    /// Checkbox: present when checked
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validated(&self) -> Result<NewVenue, Vec<String>> {
        let mut errors = Vec::new();

        require(&self.name, "Name", &mut errors);
        require(&self.city, "City", &mut errors);
        check_state(&self.state, &mut errors);
        let genres = parse_genre_selection(&self.genres, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewVenue {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            website: self.website.trim().to_string(),
            image_link: self.image_link.trim().to_string(),
            facebook_link: self.facebook_link.trim().to_string(),
            genres,
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: self.seeking_description.trim().to_string(),
        })
    }
}

impl From<stagefront_common::db::Venue> for VenueForm {
    /// Prefill the edit form from a stored row; the checkbox field is
    /// present exactly when the flag is set.
    fn from(v: stagefront_common::db::Venue) -> Self {
        Self {
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            website: v.website,
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            genres: v.genres,
            seeking_talent: v.seeking_talent.then(|| "y".to_string()),
            seeking_description: v.seeking_description,
        }
    }
}

/// Raw artist form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validated(&self) -> Result<NewArtist, Vec<String>> {
        let mut errors = Vec::new();

        require(&self.name, "Name", &mut errors);
        require(&self.city, "City", &mut errors);
        check_state(&self.state, &mut errors);
        let genres = parse_genre_selection(&self.genres, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewArtist {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: self.phone.trim().to_string(),
            website: self.website.trim().to_string(),
            image_link: self.image_link.trim().to_string(),
            facebook_link: self.facebook_link.trim().to_string(),
            genres,
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: self.seeking_description.trim().to_string(),
        })
    }
}

impl From<stagefront_common::db::Artist> for ArtistForm {
    fn from(a: stagefront_common::db::Artist) -> Self {
        Self {
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone,
            website: a.website,
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            genres: a.genres,
            seeking_venue: a.seeking_venue.then(|| "y".to_string()),
            seeking_description: a.seeking_description,
        }
    }
}

/// Raw show form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn validated(&self) -> Result<NewShow, Vec<String>> {
        let mut errors = Vec::new();

        let artist_id = parse_id(&self.artist_id, "Artist ID", &mut errors);
        let venue_id = parse_id(&self.venue_id, "Venue ID", &mut errors);
        let start_time = if self.start_time.trim().is_empty() {
            errors.push("Start time is required".to_string());
            None
        } else {
            match parse_show_time(&self.start_time) {
                Ok(t) => Some(t),
                Err(_) => {
                    errors.push("Start time is not a valid date and time".to_string());
                    None
                }
            }
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

/// Search box submission; a missing or empty term matches everything
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

fn require(value: &str, label: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{label} is required"));
    }
}

fn check_state(value: &str, errors: &mut Vec<String>) {
    let code = value.trim();
    if code.is_empty() {
        errors.push("State is required".to_string());
    } else if !STATE_CODES.contains(&code) {
        errors.push(format!("State must be a valid region code, got '{code}'"));
    }
}

/// Split a comma-joined genre selection into tags.
///
/// Tags are trimmed and empty segments dropped, so the surviving tags can
/// never contain the storage delimiter and the stored string round-trips
/// losslessly.
fn parse_genre_selection(value: &str, errors: &mut Vec<String>) -> Vec<String> {
    let genres: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    if genres.is_empty() {
        errors.push("At least one genre is required".to_string());
    }
    genres
}

fn parse_id(value: &str, label: &str, errors: &mut Vec<String>) -> Option<i64> {
    match value.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(format!("{label} must be a number"));
            None
        }
    }
}
