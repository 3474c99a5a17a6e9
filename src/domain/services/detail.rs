use crate::domain::models::{
    artist::Artist,
    show::{ShowListing, ShowTiming},
    venue::Venue,
};
use crate::domain::ports::{ArtistRepository, ShowRepository, VenueRepository};
use crate::domain::services::datetime::format_show_time;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A show on a venue page, described by the performing artist.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArtistAppearance {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ArtistAppearance {
    fn from(row: ShowListing) -> Self {
        Self {
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_show_time(&row.start_time),
        }
    }
}

/// A show on an artist page, described by the hosting venue.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct VenueAppearance {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for VenueAppearance {
    fn from(row: ShowListing) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            start_time: format_show_time(&row.start_time),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// `Ok(None)` when no venue has this id.
pub async fn venue_detail(
    venues: &dyn VenueRepository,
    shows: &dyn ShowRepository,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Option<VenueDetail>, AppError> {
    let Some(venue) = venues.find_by_id(id).await? else {
        return Ok(None);
    };

    let past_shows: Vec<ArtistAppearance> = shows
        .list_by_venue(id, ShowTiming::Past, now)
        .await?
        .into_iter()
        .map(ArtistAppearance::from)
        .collect();
    let upcoming_shows: Vec<ArtistAppearance> = shows
        .list_by_venue(id, ShowTiming::Upcoming, now)
        .await?
        .into_iter()
        .map(ArtistAppearance::from)
        .collect();

    Ok(Some(VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

pub async fn artist_detail(
    artists: &dyn ArtistRepository,
    shows: &dyn ShowRepository,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Option<ArtistDetail>, AppError> {
    let Some(artist) = artists.find_by_id(id).await? else {
        return Ok(None);
    };

    let past_shows: Vec<VenueAppearance> = shows
        .list_by_artist(id, ShowTiming::Past, now)
        .await?
        .into_iter()
        .map(VenueAppearance::from)
        .collect();
    let upcoming_shows: Vec<VenueAppearance> = shows
        .list_by_artist(id, ShowTiming::Upcoming, now)
        .await?
        .into_iter()
        .map(VenueAppearance::from)
        .collect();

    Ok(Some(ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}
