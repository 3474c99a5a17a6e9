use crate::domain::ports::{ArtistRepository, ShowRepository, VenueRepository};
use crate::domain::services::listing::ListedEntity;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListedEntity>,
}

impl SearchResults {
    fn new(data: Vec<ListedEntity>) -> Self {
        Self { count: data.len(), data }
    }
}

pub async fn search_venues(
    venues: &dyn VenueRepository,
    shows: &dyn ShowRepository,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults, AppError> {
    let matches = venues.search_by_name(term).await?;
    let mut data = Vec::with_capacity(matches.len());
    for venue in matches {
        let num_upcoming_shows = shows.count_upcoming_by_venue(venue.id, now).await?;
        data.push(ListedEntity { id: venue.id, name: venue.name, num_upcoming_shows });
    }
    Ok(SearchResults::new(data))
}

pub async fn search_artists(
    artists: &dyn ArtistRepository,
    shows: &dyn ShowRepository,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults, AppError> {
    let matches = artists.search_by_name(term).await?;
    let mut data = Vec::with_capacity(matches.len());
    for artist in matches {
        let num_upcoming_shows = shows.count_upcoming_by_artist(artist.id, now).await?;
        data.push(ListedEntity { id: artist.id, name: artist.name, num_upcoming_shows });
    }
    Ok(SearchResults::new(data))
}
