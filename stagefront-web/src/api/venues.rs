//! Venue pages: grouped listing, search, detail, create, edit, delete

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Local;
use tracing::{error, info};

use crate::api::error::PageError;
use crate::api::pages::render_home;
use crate::api::{flash_message, FlashParams};
use crate::forms::{SearchForm, VenueForm};
use crate::templates::{SearchVenuesTemplate, VenueDetailTemplate, VenueFormTemplate, VenuesTemplate};
use crate::{mutations, views, AppState};

/// GET /venues
///
/// Grouped venue listing: one section per distinct (city, state) pair.
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let areas = views::venue_groups(&state.db).await?;
    Ok(Html(VenuesTemplate { areas }.render()?))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = views::search_venues(&state.db, &form.search_term).await?;
    Ok(Html(
        SearchVenuesTemplate {
            search_term: form.search_term,
            count: results.count,
            data: results.data,
        }
        .render()?,
    ))
}

/// GET /venues/:id
pub async fn venue_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>, PageError> {
    // One clock read per request keeps the upcoming/past split consistent
    let now = Local::now().naive_local();
    let Some(detail) = views::venue_detail(&state.db, id, now).await? else {
        return Err(PageError::NotFound);
    };
    let flash = flash_message(params.flash.as_deref(), &detail.venue.name);
    Ok(Html(VenueDetailTemplate { flash, detail }.render()?))
}

/// GET /venues/create
pub async fn new_venue_form() -> Result<Html<String>, PageError> {
    Ok(Html(
        VenueFormTemplate {
            title: "List a new venue".to_string(),
            action: "/venues/create".to_string(),
            form: VenueForm::default(),
            errors: Vec::new(),
        }
        .render()?,
    ))
}

/// POST /venues/create
///
/// Validation failure re-renders the form with field errors; a mutation
/// failure rolls back and lands on the home page with a failure flash
/// (still HTTP 200).
pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Html<String>, PageError> {
    let venue = match form.validated() {
        Ok(venue) => venue,
        Err(errors) => {
            return Ok(Html(
                VenueFormTemplate {
                    title: "List a new venue".to_string(),
                    action: "/venues/create".to_string(),
                    form,
                    errors,
                }
                .render()?,
            ));
        }
    };

    let name = venue.name.clone();
    let flash = match mutations::create_venue(&state.db, venue).await {
        Ok(id) => {
            info!("Created venue {id}: {name}");
            format!("Venue {name} was successfully listed!")
        }
        Err(err) => {
            error!("Venue create failed: {err}");
            format!("Error: Venue {name} could not be added!")
        }
    };
    render_home(Some(flash))
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let Some(venue) = views::get_venue(&state.db, id).await? else {
        return Err(PageError::NotFound);
    };
    Ok(Html(
        VenueFormTemplate {
            title: format!("Edit venue {}", venue.name),
            action: format!("/venues/{id}/edit"),
            form: venue.into(),
            errors: Vec::new(),
        }
        .render()?,
    ))
}

/// POST /venues/:id/edit
///
/// Full-record overwrite, last write wins. Redirects to the detail page
/// with a flash token for both outcomes.
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    let venue = match form.validated() {
        Ok(venue) => venue,
        Err(errors) => {
            return Ok(Html(
                VenueFormTemplate {
                    title: "Edit venue".to_string(),
                    action: format!("/venues/{id}/edit"),
                    form,
                    errors,
                }
                .render()?,
            )
            .into_response());
        }
    };

    match mutations::update_venue(&state.db, id, venue).await {
        Ok(()) => Ok(Redirect::to(&format!("/venues/{id}?flash=updated")).into_response()),
        Err(err) => {
            error!("Venue update failed: {err}");
            Ok(Redirect::to(&format!("/venues/{id}?flash=update_failed")).into_response())
        }
    }
}

/// POST /venues/:id/delete
///
/// Idempotent: deleting an id with no matching row is not an error.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    match mutations::delete_venue(&state.db, id).await {
        Ok(rows) => info!("Deleted venue {id} ({rows} rows)"),
        Err(err) => error!("Venue delete failed: {err}"),
    }
    render_home(None)
}
