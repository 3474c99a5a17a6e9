use crate::api::extractors::flash::{FlashLevel, FlashMessage};
use crate::domain::services::validation::FieldError;

/// Flash messages for a rejected form: the headline plus one line per field.
pub fn validation_messages(headline: String, errors: &[FieldError]) -> Vec<FlashMessage> {
    std::iter::once(FlashMessage::new(FlashLevel::Error, headline))
        .chain(errors.iter().map(|e| FlashMessage::new(FlashLevel::Error, e.to_string())))
        .collect()
}
