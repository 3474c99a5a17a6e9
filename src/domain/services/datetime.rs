use chrono::{
    format::{Item, StrftimeItems},
    DateTime, NaiveDate, NaiveDateTime, Utc,
};
use thiserror::Error;

/// `EEEE MMMM, d, y 'at' h:mma`
const FULL_PATTERN: &str = "%A %B, %-d, %Y at %-I:%M%p";
/// `EE MM, dd, y h:mma`
const MEDIUM_PATTERN: &str = "%a %m, %d, %Y %-I:%M%p";

/// Layout used for show entries on detail pages.
pub const SHOW_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_PATTERNS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Error, PartialEq)]
pub enum DatetimeError {
    #[error("unrecognized timestamp '{0}'")]
    Unparseable(String),
    #[error("invalid datetime format '{0}'")]
    BadFormat(String),
}

/// Parses the timestamp layouts the app accepts. Values without an offset are
/// taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DatetimeError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for pattern in NAIVE_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DatetimeError::Unparseable(raw.to_string()))
}

/// Renders a timestamp in one of the named styles (`full`, `medium`), or with
/// a caller-supplied strftime pattern.
pub fn format_datetime(value: &DateTime<Utc>, format: &str) -> Result<String, DatetimeError> {
    let pattern = match format {
        "full" => FULL_PATTERN,
        "medium" => MEDIUM_PATTERN,
        other => other,
    };

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DatetimeError::BadFormat(format.to_string()));
    }

    Ok(value.format(pattern).to_string())
}

pub fn format_show_time(value: &DateTime<Utc>) -> String {
    value.format(SHOW_TIME_PATTERN).to_string()
}
