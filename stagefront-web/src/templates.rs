//! Page templates
//!
//! askama template structs; one per rendered page. Handlers fill these
//! from the view layer and render to `Html<String>`.

use askama::Template;

use crate::forms::{ArtistForm, ShowForm, VenueForm};
use crate::views::{ArtistDetail, ArtistRef, ArtistView, ShowView, VenueDetail, VenueGroup, VenueView};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "venues.html")]
pub struct VenuesTemplate {
    pub areas: Vec<VenueGroup>,
}

#[derive(Template)]
#[template(path = "search_venues.html")]
pub struct SearchVenuesTemplate {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<VenueView>,
}

#[derive(Template)]
#[template(path = "search_artists.html")]
pub struct SearchArtistsTemplate {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<ArtistView>,
}

#[derive(Template)]
#[template(path = "venue_detail.html")]
pub struct VenueDetailTemplate {
    pub flash: Option<String>,
    pub detail: VenueDetail,
}

#[derive(Template)]
#[template(path = "artist_detail.html")]
pub struct ArtistDetailTemplate {
    pub flash: Option<String>,
    pub detail: ArtistDetail,
}

#[derive(Template)]
#[template(path = "artists.html")]
pub struct ArtistsTemplate {
    pub artists: Vec<ArtistRef>,
}

#[derive(Template)]
#[template(path = "shows.html")]
pub struct ShowsTemplate {
    pub shows: Vec<ShowView>,
}

/// Shared by the new-venue and edit-venue pages; `action` is the POST
/// target and `form` carries either blank, prefilled, or re-submitted
/// values.
#[derive(Template)]
#[template(path = "venue_form.html")]
pub struct VenueFormTemplate {
    pub title: String,
    pub action: String,
    pub form: VenueForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "artist_form.html")]
pub struct ArtistFormTemplate {
    pub title: String,
    pub action: String,
    pub form: ArtistForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "show_form.html")]
pub struct ShowFormTemplate {
    pub form: ShowForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

#[derive(Template)]
#[template(path = "server_error.html")]
pub struct ServerErrorTemplate {}
