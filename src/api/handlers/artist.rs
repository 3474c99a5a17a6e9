use axum::{
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::Form;
use chrono::Utc;
use std::sync::Arc;
use tera::Context;
use tracing::{info, warn};

use crate::api::dtos::forms::{ArtistForm, SearchForm};
use crate::api::dtos::views::validation_messages;
use crate::api::extractors::{entity_id::EntityId, flash::{Flash, FlashMessage}};
use crate::api::handlers::{home::home_page, page};
use crate::domain::services::defaults::{GENRES, STATES};
use crate::domain::services::detail::artist_detail;
use crate::domain::services::{listing, search};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let areas = listing::artist_areas(state.artist_repo.as_ref(), state.show_repo.as_ref(), Utc::now()).await?;
    let mut context = Context::new();
    context.insert("areas", &areas);
    page(&state, "pages/artists.html", context, flash.take(Vec::new()))
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let results = search::search_artists(
        state.artist_repo.as_ref(),
        state.show_repo.as_ref(),
        &form.search_term,
        Utc::now(),
    )
    .await?;
    info!("Artist search for '{}' matched {}", form.search_term, results.count);

    let mut context = Context::new();
    context.insert("results", &results);
    context.insert("search_term", &form.search_term);
    page(&state, "pages/search_artists.html", context, flash.take(Vec::new()))
}

pub async fn show_artist(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let detail = artist_detail(state.artist_repo.as_ref(), state.show_repo.as_ref(), id, Utc::now())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let mut context = Context::new();
    context.insert("artist", &detail);
    page(&state, "pages/show_artist.html", context, flash.take(Vec::new()))
}

pub async fn create_artist_form(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    page(&state, "forms/new_artist.html", form_context(&ArtistForm::default()), flash.take(Vec::new()))
}

pub async fn create_artist_submission(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Form(form): Form<ArtistForm>,
) -> Result<Html<String>, AppError> {
    let failed = || format!("An error occurred. Artist {} could not be listed.", form.display_name());

    let messages = match form.validate() {
        Ok(input) => match state.artist_repo.create(&input).await {
            Ok(artist) => {
                info!("Listed artist {} ({})", artist.name, artist.id);
                vec![FlashMessage::success(format!("Artist {} was successfully listed!", artist.name))]
            }
            Err(e) if e.is_store_unavailable() => return Err(e),
            Err(e) => {
                warn!("Artist insert failed: {}", e);
                vec![FlashMessage::error(failed())]
            }
        },
        Err(errors) => {
            info!("Rejected artist form with {} invalid fields", errors.len());
            validation_messages(failed(), &errors)
        }
    };

    home_page(&state, flash.take(messages)).await
}

pub async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    let artist = state.artist_repo.find_by_id(id).await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let mut context = form_context(&ArtistForm::from(&artist));
    context.insert("artist", &artist);
    page(&state, "forms/edit_artist.html", context, flash.take(Vec::new()))
}

pub async fn edit_artist_submission(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
    Form(form): Form<ArtistForm>,
) -> Result<Redirect, AppError> {
    let mut artist = state.artist_repo.find_by_id(id).await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;
    let edit_path = format!("/artists/{}/edit", id);

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            info!("Rejected edit of artist {} with {} invalid fields", id, errors.len());
            flash.redirect_with(validation_messages(
                "An error occurred. Artist could not be edited.".to_string(),
                &errors,
            ));
            return Ok(Redirect::to(&edit_path));
        }
    };

    artist.apply(input);
    match state.artist_repo.update(&artist).await {
        Ok(updated) => {
            info!("Updated artist {} ({})", updated.name, updated.id);
            flash.redirect_with(vec![FlashMessage::success(format!(
                "Artist {} was successfully updated!",
                updated.name
            ))]);
            Ok(Redirect::to(&format!("/artists/{}", id)))
        }
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(e) if e.is_store_unavailable() => Err(e),
        Err(e) => {
            warn!("Artist {} update failed: {}", id, e);
            flash.redirect_with(vec![FlashMessage::error("An error occurred. Artist could not be edited.")]);
            Ok(Redirect::to(&edit_path))
        }
    }
}

fn form_context(form: &ArtistForm) -> Context {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("genres", GENRES);
    context.insert("states", STATES);
    context
}
