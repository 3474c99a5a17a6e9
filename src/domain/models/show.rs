use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowInput {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

/// A show joined with the names and images of its venue and artist.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Where a show sits relative to an evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Upcoming,
    Past,
}

impl ShowTiming {
    /// SQL comparison placing `start_time` on the left and `now` on the right.
    ///
    /// A show starting exactly at `now` has begun and counts as past, so every
    /// show falls in exactly one bucket.
    pub fn sql_operator(self) -> &'static str {
        match self {
            ShowTiming::Upcoming => ">",
            ShowTiming::Past => "<=",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_split_at_now() {
        assert_eq!(ShowTiming::Upcoming.sql_operator(), ">");
        assert_eq!(ShowTiming::Past.sql_operator(), "<=");
    }
}
