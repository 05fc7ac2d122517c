//! Show pages: listing and creation
//!
//! Shows are never edited or deleted through the web surface; they go
//! away only when a parent venue or artist is deleted (cascade).

use askama::Template;
use axum::extract::{Form, State};
use axum::response::Html;
use tracing::{error, info};

use crate::api::error::PageError;
use crate::api::pages::render_home;
use crate::forms::ShowForm;
use crate::templates::{ShowFormTemplate, ShowsTemplate};
use crate::{mutations, views, AppState};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let shows = views::list_shows(&state.db).await?;
    Ok(Html(ShowsTemplate { shows }.render()?))
}

/// GET /shows/create
pub async fn new_show_form() -> Result<Html<String>, PageError> {
    Ok(Html(
        ShowFormTemplate {
            form: ShowForm::default(),
            errors: Vec::new(),
        }
        .render()?,
    ))
}

/// POST /shows/create
///
/// A dangling artist_id or venue_id fails the foreign key check inside
/// the transaction; the rollback leaves no record and the user sees the
/// generic failure message.
pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Html<String>, PageError> {
    let show = match form.validated() {
        Ok(show) => show,
        Err(errors) => {
            return Ok(Html(ShowFormTemplate { form, errors }.render()?));
        }
    };

    let flash = match mutations::create_show(&state.db, show).await {
        Ok(id) => {
            info!("Created show {id}");
            "Show was successfully listed!".to_string()
        }
        Err(err) => {
            error!("Show create failed: {err}");
            "Error: Show could not be added!".to_string()
        }
    };
    render_home(Some(flash))
}
