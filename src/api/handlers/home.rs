use axum::{extract::State, response::Html};
use std::sync::Arc;
use tera::Context;

use crate::api::extractors::flash::{Flash, FlashMessage};
use crate::api::handlers::page;
use crate::error::AppError;
use crate::state::AppState;

pub async fn index(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Html<String>, AppError> {
    home_page(&state, flash.take(Vec::new())).await
}

/// The landing page. Create and delete submissions render it directly with
/// their outcome message.
pub(crate) async fn home_page(
    state: &AppState,
    messages: Vec<FlashMessage>,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("venue_count", &state.venue_repo.count().await?);
    context.insert("artist_count", &state.artist_repo.count().await?);
    page(state, "pages/home.html", context, messages)
}
