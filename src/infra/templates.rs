use axum::response::Html;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

use crate::domain::services::datetime::{format_datetime, parse_timestamp};
use crate::error::AppError;

/// Every page template, embedded at build time under the name handlers
/// render it by.
const TEMPLATES: &[(&str, &str)] = &[
    ("layouts/main.html", include_str!("../../templates/layouts/main.html")),
    ("pages/home.html", include_str!("../../templates/pages/home.html")),
    ("pages/venues.html", include_str!("../../templates/pages/venues.html")),
    ("pages/artists.html", include_str!("../../templates/pages/artists.html")),
    ("pages/shows.html", include_str!("../../templates/pages/shows.html")),
    ("pages/search_venues.html", include_str!("../../templates/pages/search_venues.html")),
    ("pages/search_artists.html", include_str!("../../templates/pages/search_artists.html")),
    ("pages/show_venue.html", include_str!("../../templates/pages/show_venue.html")),
    ("pages/show_artist.html", include_str!("../../templates/pages/show_artist.html")),
    ("forms/_venue_fields.html", include_str!("../../templates/forms/_venue_fields.html")),
    ("forms/_artist_fields.html", include_str!("../../templates/forms/_artist_fields.html")),
    ("forms/new_venue.html", include_str!("../../templates/forms/new_venue.html")),
    ("forms/edit_venue.html", include_str!("../../templates/forms/edit_venue.html")),
    ("forms/new_artist.html", include_str!("../../templates/forms/new_artist.html")),
    ("forms/edit_artist.html", include_str!("../../templates/forms/edit_artist.html")),
    ("forms/new_show.html", include_str!("../../templates/forms/new_show.html")),
];

pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    tera.register_filter("datetime", datetime_filter);
    Ok(tera)
}

pub fn render(tera: &Tera, name: &str, context: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(tera.render(name, context)?))
}

/// `{{ value | datetime(format="full") }}`. The format defaults to `medium`.
fn datetime_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("datetime filter expects a string"))?;
    let format = args.get("format").and_then(Value::as_str).unwrap_or("medium");

    let timestamp = parse_timestamp(raw).map_err(|e| tera::Error::msg(e.to_string()))?;
    let formatted = format_datetime(&timestamp, format).map_err(|e| tera::Error::msg(e.to_string()))?;
    Ok(Value::String(formatted))
}
