//! Query/view layer
//!
//! Read-side operations producing request-shaped views: the grouped venue
//! listing, substring search, detail views with the upcoming/past show
//! split, and the show listing. All functions take the pool explicitly and
//! return plain serializable data; nothing here mutates.
//!
//! "Upcoming" means start_time strictly after the supplied `now`; "past"
//! is everything at or before it. Callers capture `now` once per request
//! so the partition stays consistent within a single response.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::SqlitePool;
use stagefront_common::db::{Artist, Show, Venue};
use stagefront_common::genres::split_genres;
use stagefront_common::time::format_show_time;
use stagefront_common::Result;

/// Public view of a venue: storage row with genres split to a tag list
#[derive(Debug, Clone, Serialize)]
pub struct VenueView {
    pub id: i64,
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

impl From<Venue> for VenueView {
    fn from(v: Venue) -> Self {
        Self {
            id: v.id,
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            website: v.website,
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            genres: split_genres(&v.genres),
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
        }
    }
}

/// Public view of an artist
#[derive(Debug, Clone, Serialize)]
pub struct ArtistView {
    pub id: i64,
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

impl From<Artist> for ArtistView {
    fn from(a: Artist) -> Self {
        Self {
            id: a.id,
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone,
            website: a.website,
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            genres: split_genres(&a.genres),
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description,
        }
    }
}

/// Id + name pair for the artist index page
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArtistRef {
    pub id: i64,
    pub name: String,
}

/// A show with both participants embedded and the start time preformatted
#[derive(Debug, Clone, Serialize)]
pub struct ShowView {
    pub id: i64,
    /// `MM/DD/YYYY, HH:MM:SS`
    pub start_time: String,
    pub artist: ArtistView,
    pub venue: VenueView,
}

/// One (city, state) bucket of the grouped venue listing
#[derive(Debug, Clone, Serialize)]
pub struct VenueGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueView>,
}

/// Substring search result: matching records plus their count
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

/// Venue detail page model with the time-partitioned show lists
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub venue: VenueView,
    pub upcoming_shows: Vec<ShowView>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ShowView>,
    pub past_shows_count: usize,
}

/// Artist detail page model with the time-partitioned show lists
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub artist: ArtistView,
    pub upcoming_shows: Vec<ShowView>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ShowView>,
    pub past_shows_count: usize,
}

/// Partition all venues by their distinct (city, state) pairs.
///
/// Group order and the order of venues within a group follow first-seen
/// venue id, which makes the listing stable across requests.
pub async fn venue_groups(pool: &SqlitePool) -> Result<Vec<VenueGroup>> {
    let venues: Vec<Venue> = sqlx::query_as("SELECT * FROM venues ORDER BY id")
        .fetch_all(pool)
        .await?;

    let mut groups: Vec<VenueGroup> = Vec::new();
    for venue in venues {
        match groups
            .iter_mut()
            .find(|g| g.city == venue.city && g.state == venue.state)
        {
            Some(group) => group.venues.push(venue.into()),
            None => groups.push(VenueGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![venue.into()],
            }),
        }
    }

    Ok(groups)
}

/// Escape LIKE wildcards in user input so the search term is matched
/// literally. The query pairs this with `ESCAPE '\'`.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Case-insensitive substring search on venue names.
///
/// An empty term matches every venue; that is defined behavior, not an
/// error (the empty string is a substring of everything).
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<SearchResults<VenueView>> {
    let pattern = format!("%{}%", escape_like(term));
    let rows: Vec<Venue> =
        sqlx::query_as("SELECT * FROM venues WHERE name LIKE ? ESCAPE '\\' ORDER BY id")
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

    let data: Vec<VenueView> = rows.into_iter().map(Into::into).collect();
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Case-insensitive substring search on artist names
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<SearchResults<ArtistView>> {
    let pattern = format!("%{}%", escape_like(term));
    let rows: Vec<Artist> =
        sqlx::query_as("SELECT * FROM artists WHERE name LIKE ? ESCAPE '\\' ORDER BY id")
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

    let data: Vec<ArtistView> = rows.into_iter().map(Into::into).collect();
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Venue detail view, or None if no such venue exists
pub async fn venue_detail(
    pool: &SqlitePool,
    id: i64,
    now: NaiveDateTime,
) -> Result<Option<VenueDetail>> {
    let Some(venue) = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    let upcoming = sqlx::query_as::<_, Show>(
        "SELECT * FROM shows WHERE venue_id = ? AND start_time > ? ORDER BY start_time",
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;
    let past = sqlx::query_as::<_, Show>(
        "SELECT * FROM shows WHERE venue_id = ? AND start_time <= ? ORDER BY start_time",
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let upcoming_shows = assemble_show_views(pool, upcoming).await?;
    let past_shows = assemble_show_views(pool, past).await?;

    Ok(Some(VenueDetail {
        venue: venue.into(),
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    }))
}

/// Artist detail view, or None if no such artist exists
pub async fn artist_detail(
    pool: &SqlitePool,
    id: i64,
    now: NaiveDateTime,
) -> Result<Option<ArtistDetail>> {
    let Some(artist) = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    let upcoming = sqlx::query_as::<_, Show>(
        "SELECT * FROM shows WHERE artist_id = ? AND start_time > ? ORDER BY start_time",
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;
    let past = sqlx::query_as::<_, Show>(
        "SELECT * FROM shows WHERE artist_id = ? AND start_time <= ? ORDER BY start_time",
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let upcoming_shows = assemble_show_views(pool, upcoming).await?;
    let past_shows = assemble_show_views(pool, past).await?;

    Ok(Some(ArtistDetail {
        artist: artist.into(),
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    }))
}

/// Every show with embedded participant views, ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowView>> {
    let shows: Vec<Show> = sqlx::query_as("SELECT * FROM shows ORDER BY start_time, id")
        .fetch_all(pool)
        .await?;
    assemble_show_views(pool, shows).await
}

/// Artist index: id + name for every artist
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<ArtistRef>> {
    let artists: Vec<ArtistRef> = sqlx::query_as("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Point lookup of a venue row (used to prefill the edit form)
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(venue)
}

/// Point lookup of an artist row (used to prefill the edit form)
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(artist)
}

/// Resolve the participants of each show into embedded public views.
///
/// Show rows always reference existing parents (enforced by the store),
/// so the lookups use fetch_one.
async fn assemble_show_views(pool: &SqlitePool, shows: Vec<Show>) -> Result<Vec<ShowView>> {
    let mut views = Vec::with_capacity(shows.len());
    for show in shows {
        let artist: Artist = sqlx::query_as("SELECT * FROM artists WHERE id = ?")
            .bind(show.artist_id)
            .fetch_one(pool)
            .await?;
        let venue: Venue = sqlx::query_as("SELECT * FROM venues WHERE id = ?")
            .bind(show.venue_id)
            .fetch_one(pool)
            .await?;
        views.push(ShowView {
            id: show.id,
            start_time: format_show_time(show.start_time),
            artist: artist.into(),
            venue: venue.into(),
        });
    }
    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("Fillmore"), "Fillmore");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%_club"), "100\\%\\_club");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
