use crate::domain::models::{
    area::Area,
    artist::{Artist, ArtistInput},
    show::{Show, ShowInput, ShowListing, ShowTiming},
    venue::{Venue, VenueInput},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn create(&self, input: &VenueInput) -> Result<Venue, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, AppError>;
    async fn list_areas(&self) -> Result<Vec<Area>, AppError>;
    async fn list_by_area(&self, city: &str, state: &str) -> Result<Vec<Venue>, AppError>;
    async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn update(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn create(&self, input: &ArtistInput) -> Result<Artist, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, AppError>;
    async fn list_areas(&self) -> Result<Vec<Area>, AppError>;
    async fn list_by_area(&self, city: &str, state: &str) -> Result<Vec<Artist>, AppError>;
    async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn update(&self, artist: &Artist) -> Result<Artist, AppError>;
}

#[async_trait]
pub trait ShowRepository: Send + Sync {
    async fn create(&self, input: &ShowInput) -> Result<Show, AppError>;
    async fn list_all(&self) -> Result<Vec<ShowListing>, AppError>;
    async fn list_by_venue(&self, venue_id: i64, timing: ShowTiming, now: DateTime<Utc>) -> Result<Vec<ShowListing>, AppError>;
    async fn list_by_artist(&self, artist_id: i64, timing: ShowTiming, now: DateTime<Utc>) -> Result<Vec<ShowListing>, AppError>;
    async fn count_upcoming_by_venue(&self, venue_id: i64, now: DateTime<Utc>) -> Result<i64, AppError>;
    async fn count_upcoming_by_artist(&self, artist_id: i64, now: DateTime<Utc>) -> Result<i64, AppError>;
}
