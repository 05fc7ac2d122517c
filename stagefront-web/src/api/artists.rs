//! Artist pages: index, search, detail, create, edit

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Local;
use tracing::{error, info};

use crate::api::error::PageError;
use crate::api::pages::render_home;
use crate::api::{flash_message, FlashParams};
use crate::forms::{ArtistForm, SearchForm};
use crate::templates::{ArtistDetailTemplate, ArtistFormTemplate, ArtistsTemplate, SearchArtistsTemplate};
use crate::{mutations, views, AppState};

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let artists = views::list_artists(&state.db).await?;
    Ok(Html(ArtistsTemplate { artists }.render()?))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = views::search_artists(&state.db, &form.search_term).await?;
    Ok(Html(
        SearchArtistsTemplate {
            search_term: form.search_term,
            count: results.count,
            data: results.data,
        }
        .render()?,
    ))
}

/// GET /artists/:id
pub async fn artist_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>, PageError> {
    let now = Local::now().naive_local();
    let Some(detail) = views::artist_detail(&state.db, id, now).await? else {
        return Err(PageError::NotFound);
    };
    let flash = flash_message(params.flash.as_deref(), &detail.artist.name);
    Ok(Html(ArtistDetailTemplate { flash, detail }.render()?))
}

/// GET /artists/create
pub async fn new_artist_form() -> Result<Html<String>, PageError> {
    Ok(Html(
        ArtistFormTemplate {
            title: "List a new artist".to_string(),
            action: "/artists/create".to_string(),
            form: ArtistForm::default(),
            errors: Vec::new(),
        }
        .render()?,
    ))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Html<String>, PageError> {
    let artist = match form.validated() {
        Ok(artist) => artist,
        Err(errors) => {
            return Ok(Html(
                ArtistFormTemplate {
                    title: "List a new artist".to_string(),
                    action: "/artists/create".to_string(),
                    form,
                    errors,
                }
                .render()?,
            ));
        }
    };

    let name = artist.name.clone();
    let flash = match mutations::create_artist(&state.db, artist).await {
        Ok(id) => {
            info!("Created artist {id}: {name}");
            format!("Artist {name} was successfully listed!")
        }
        Err(err) => {
            error!("Artist create failed: {err}");
            format!("Error: Artist {name} could not be added!")
        }
    };
    render_home(Some(flash))
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let Some(artist) = views::get_artist(&state.db, id).await? else {
        return Err(PageError::NotFound);
    };
    Ok(Html(
        ArtistFormTemplate {
            title: format!("Edit artist {}", artist.name),
            action: format!("/artists/{id}/edit"),
            form: artist.into(),
            errors: Vec::new(),
        }
        .render()?,
    ))
}

/// POST /artists/:id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    let artist = match form.validated() {
        Ok(artist) => artist,
        Err(errors) => {
            return Ok(Html(
                ArtistFormTemplate {
                    title: "Edit artist".to_string(),
                    action: format!("/artists/{id}/edit"),
                    form,
                    errors,
                }
                .render()?,
            )
            .into_response());
        }
    };

    match mutations::update_artist(&state.db, id, artist).await {
        Ok(()) => Ok(Redirect::to(&format!("/artists/{id}?flash=updated")).into_response()),
        Err(err) => {
            error!("Artist update failed: {err}");
            Ok(Redirect::to(&format!("/artists/{id}?flash=update_failed")).into_response())
        }
    }
}
