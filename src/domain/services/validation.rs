use crate::domain::services::defaults::{is_known_genre, is_known_state};
use serde::Serialize;
use std::fmt;
use url::Url;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulates field errors across one form.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Trimmed value, or an error when blank.
    pub fn required(&mut self, field: &'static str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.push(field, "This field is required.");
        }
        trimmed.to_string()
    }

    /// Trimmed value, `None` when blank.
    pub fn optional(&mut self, value: &str) -> Option<String> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn state(&mut self, field: &'static str, value: &str) -> String {
        let state = self.required(field, value);
        if !state.is_empty() && !is_known_state(&state) {
            self.push(field, "Not a valid choice.");
        }
        state
    }

    pub fn genres(&mut self, field: &'static str, values: &[String]) -> Vec<String> {
        let mut genres: Vec<String> = Vec::with_capacity(values.len());
        for raw in values {
            let genre = raw.trim();
            if genre.is_empty() {
                continue;
            }
            if !is_known_genre(genre) {
                self.push(field, format!("'{}' is not a valid choice.", genre));
            } else if !genres.iter().any(|g| g == genre) {
                genres.push(genre.to_string());
            }
        }
        if values.iter().all(|v| v.trim().is_empty()) {
            self.push(field, "This field is required.");
        }
        genres
    }

    pub fn phone(&mut self, field: &'static str, value: &str) -> Option<String> {
        let phone = self.optional(value)?;
        let allowed = phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'));
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if !allowed || digits != 10 {
            self.push(field, "Invalid phone number.");
        }
        Some(phone)
    }

    pub fn link(&mut self, field: &'static str, value: &str) -> Option<String> {
        let link = self.optional(value)?;
        match Url::parse(&link) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {}
            _ => self.push(field, "Invalid URL."),
        }
        Some(link)
    }

    pub fn positive_id(&mut self, field: &'static str, value: &str) -> i64 {
        match value.trim().parse::<i64>() {
            Ok(id) if id > 0 => id,
            Ok(_) => {
                self.push(field, "Must be a positive number.");
                0
            }
            Err(_) if value.trim().is_empty() => {
                self.push(field, "This field is required.");
                0
            }
            Err(_) => {
                self.push(field, "Must be a number.");
                0
            }
        }
    }

    /// Hands back `value` only if no field failed.
    pub fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

/// Checkbox semantics: any submitted value other than an explicit false turns it on.
pub fn checkbox(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "false" | "off" | "n" | "no" | "0"),
    }
}
