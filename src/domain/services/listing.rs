use crate::domain::models::show::ShowListing;
use crate::domain::ports::{ArtistRepository, ShowRepository, VenueRepository};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entity on a listing page, with its live upcoming-show count.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListedEntity {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Entities sharing one `(city, state)` pair.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AreaGroup {
    pub city: String,
    pub state: String,
    pub entries: Vec<ListedEntity>,
}

pub async fn venue_areas(
    venues: &dyn VenueRepository,
    shows: &dyn ShowRepository,
    now: DateTime<Utc>,
) -> Result<Vec<AreaGroup>, AppError> {
    let areas = venues.list_areas().await?;
    let mut groups = Vec::with_capacity(areas.len());

    for area in areas {
        let members = venues.list_by_area(&area.city, &area.state).await?;
        let mut entries = Vec::with_capacity(members.len());
        for venue in members {
            let num_upcoming_shows = shows.count_upcoming_by_venue(venue.id, now).await?;
            entries.push(ListedEntity { id: venue.id, name: venue.name, num_upcoming_shows });
        }
        groups.push(AreaGroup { city: area.city, state: area.state, entries });
    }

    Ok(groups)
}

pub async fn artist_areas(
    artists: &dyn ArtistRepository,
    shows: &dyn ShowRepository,
    now: DateTime<Utc>,
) -> Result<Vec<AreaGroup>, AppError> {
    let areas = artists.list_areas().await?;
    let mut groups = Vec::with_capacity(areas.len());

    for area in areas {
        let members = artists.list_by_area(&area.city, &area.state).await?;
        let mut entries = Vec::with_capacity(members.len());
        for artist in members {
            let num_upcoming_shows = shows.count_upcoming_by_artist(artist.id, now).await?;
            entries.push(ListedEntity { id: artist.id, name: artist.name, num_upcoming_shows });
        }
        groups.push(AreaGroup { city: area.city, state: area.state, entries });
    }

    Ok(groups)
}

/// Row on the flat `/shows` page. `start_time` is RFC 3339 so the
/// `datetime` filter can restyle it.
#[derive(Debug, Serialize, Clone)]
pub struct ShowListItem {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ShowListItem {
    fn from(row: ShowListing) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time.to_rfc3339(),
        }
    }
}

pub async fn all_shows(shows: &dyn ShowRepository) -> Result<Vec<ShowListItem>, AppError> {
    Ok(shows.list_all().await?.into_iter().map(ShowListItem::from).collect())
}
