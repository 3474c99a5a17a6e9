pub mod artist;
pub mod health;
pub mod home;
pub mod show;
pub mod venue;

use axum::response::Html;
use tera::Context;

use crate::api::extractors::flash::FlashMessage;
use crate::error::AppError;
use crate::infra::templates::render;
use crate::state::AppState;

/// Renders a full page with this response's flash messages in the layout.
pub(crate) fn page(
    state: &AppState,
    template: &str,
    mut context: Context,
    messages: Vec<FlashMessage>,
) -> Result<Html<String>, AppError> {
    context.insert("messages", &messages);
    render(&state.templates, template, &context)
}
