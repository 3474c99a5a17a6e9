use axum::{extract::State, response::Html};
use axum_extra::extract::Form;
use chrono::Utc;
use std::sync::Arc;
use tera::Context;
use tracing::{info, warn};

use crate::api::dtos::forms::ShowForm;
use crate::api::dtos::views::validation_messages;
use crate::api::extractors::flash::{Flash, FlashMessage};
use crate::api::handlers::{home::home_page, page};
use crate::domain::models::show::{Show, ShowInput};
use crate::domain::services::listing;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let shows = listing::all_shows(state.show_repo.as_ref()).await?;
    let mut context = Context::new();
    context.insert("shows", &shows);
    page(&state, "pages/shows.html", context, flash.take(Vec::new()))
}

pub async fn create_show_form(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("form", &ShowForm::starting_at(Utc::now()));
    page(&state, "forms/new_show.html", context, flash.take(Vec::new()))
}

pub async fn create_show_submission(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Form(form): Form<ShowForm>,
) -> Result<Html<String>, AppError> {
    let messages = match form.validate() {
        Ok(input) => match create_show(&state, &input).await {
            Ok(show) => {
                info!("Listed show {} (venue {}, artist {})", show.id, show.venue_id, show.artist_id);
                vec![FlashMessage::success("Show was successfully listed!")]
            }
            Err(e) if e.is_store_unavailable() => return Err(e),
            Err(e) => {
                warn!("Show insert failed: {}", e);
                vec![FlashMessage::error("Show could not be listed! Please double check the information.")]
            }
        },
        Err(errors) => {
            info!("Rejected show form with {} invalid fields", errors.len());
            validation_messages("An error occurred. Show could not be listed.".to_string(), &errors)
        }
    };

    home_page(&state, flash.take(messages)).await
}

/// Both ends of a show must exist before it is stored. The foreign keys
/// enforce the same thing if one disappears in between.
async fn create_show(state: &AppState, input: &ShowInput) -> Result<Show, AppError> {
    if state.venue_repo.find_by_id(input.venue_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Venue {} not found", input.venue_id)));
    }
    if state.artist_repo.find_by_id(input.artist_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Artist {} not found", input.artist_id)));
    }
    state.show_repo.create(input).await
}
