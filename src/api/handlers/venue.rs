use axum::{
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::Form;
use chrono::Utc;
use std::sync::Arc;
use tera::Context;
use tracing::{info, warn};

use crate::api::dtos::forms::{SearchForm, VenueForm};
use crate::api::dtos::views::validation_messages;
use crate::api::extractors::{entity_id::EntityId, flash::{Flash, FlashMessage}};
use crate::api::handlers::{home::home_page, page};
use crate::domain::services::defaults::{GENRES, STATES};
use crate::domain::services::detail::{venue_detail, VenueDetail};
use crate::domain::services::{listing, search};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let areas = listing::venue_areas(state.venue_repo.as_ref(), state.show_repo.as_ref(), Utc::now()).await?;
    let mut context = Context::new();
    context.insert("areas", &areas);
    page(&state, "pages/venues.html", context, flash.take(Vec::new()))
}

pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let results = search::search_venues(
        state.venue_repo.as_ref(),
        state.show_repo.as_ref(),
        &form.search_term,
        Utc::now(),
    )
    .await?;
    info!("Venue search for '{}' matched {}", form.search_term, results.count);

    let mut context = Context::new();
    context.insert("results", &results);
    context.insert("search_term", &form.search_term);
    page(&state, "pages/search_venues.html", context, flash.take(Vec::new()))
}

pub async fn show_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let detail = find_detail(&state, id).await?;
    venue_page(&state, detail, flash.take(Vec::new()))
}

pub async fn create_venue_form(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    page(&state, "forms/new_venue.html", form_context(&VenueForm::default()), flash.take(Vec::new()))
}

pub async fn create_venue_submission(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Form(form): Form<VenueForm>,
) -> Result<Html<String>, AppError> {
    let failed = || format!("An error occurred. Venue {} could not be listed.", form.display_name());

    let messages = match form.validate() {
        Ok(input) => match state.venue_repo.create(&input).await {
            Ok(venue) => {
                info!("Listed venue {} ({})", venue.name, venue.id);
                vec![FlashMessage::success(format!("Venue {} was successfully listed!", venue.name))]
            }
            Err(e) if e.is_store_unavailable() => return Err(e),
            Err(e) => {
                warn!("Venue insert failed: {}", e);
                vec![FlashMessage::error(failed())]
            }
        },
        Err(errors) => {
            info!("Rejected venue form with {} invalid fields", errors.len());
            validation_messages(failed(), &errors)
        }
    };

    home_page(&state, flash.take(messages)).await
}

pub async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let venue = state.venue_repo.find_by_id(id).await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    let mut context = form_context(&VenueForm::from(&venue));
    context.insert("venue", &venue);
    page(&state, "forms/edit_venue.html", context, flash.take(Vec::new()))
}

pub async fn edit_venue_submission(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
    Form(form): Form<VenueForm>,
) -> Result<Redirect, AppError> {
    let mut venue = state.venue_repo.find_by_id(id).await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;
    let edit_path = format!("/venues/{}/edit", id);

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            info!("Rejected edit of venue {} with {} invalid fields", id, errors.len());
            flash.redirect_with(validation_messages(
                "An error occurred. Venue could not be edited.".to_string(),
                &errors,
            ));
            return Ok(Redirect::to(&edit_path));
        }
    };

    venue.apply(input);
    match state.venue_repo.update(&venue).await {
        Ok(updated) => {
            info!("Updated venue {} ({})", updated.name, updated.id);
            flash.redirect_with(vec![FlashMessage::success(format!(
                "Venue {} was successfully updated!",
                updated.name
            ))]);
            Ok(Redirect::to(&format!("/venues/{}", id)))
        }
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(e) if e.is_store_unavailable() => Err(e),
        Err(e) => {
            warn!("Venue {} update failed: {}", id, e);
            flash.redirect_with(vec![FlashMessage::error("An error occurred. Venue could not be edited.")]);
            Ok(Redirect::to(&edit_path))
        }
    }
}

/// Removes a venue that hosts no shows. A venue with shows stays, and its
/// page is shown again with the error.
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let venue = state.venue_repo.find_by_id(id).await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    match state.venue_repo.delete(id).await {
        Ok(()) => {
            info!("Deleted venue {} ({})", venue.name, id);
            let message = FlashMessage::success(format!("Venue {} was successfully deleted!", venue.name));
            home_page(&state, flash.take(vec![message])).await
        }
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(e) if e.is_store_unavailable() => Err(e),
        Err(e) => {
            if e.is_foreign_key_violation() {
                info!("Venue {} still hosts shows, keeping it", id);
            } else {
                warn!("Venue {} delete failed: {}", id, e);
            }
            let message = FlashMessage::error(format!(
                "An error occurred. Venue {} could not be deleted.",
                venue.name
            ));
            let detail = find_detail(&state, id).await?;
            venue_page(&state, detail, flash.take(vec![message]))
        }
    }
}

async fn find_detail(state: &AppState, id: i64) -> Result<VenueDetail, AppError> {
    venue_detail(state.venue_repo.as_ref(), state.show_repo.as_ref(), id, Utc::now())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
}

fn venue_page(
    state: &AppState,
    detail: VenueDetail,
    messages: Vec<FlashMessage>,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("venue", &detail);
    page(state, "pages/show_venue.html", context, messages)
}

fn form_context(form: &VenueForm) -> Context {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("genres", GENRES);
    context.insert("states", STATES);
    context
}
