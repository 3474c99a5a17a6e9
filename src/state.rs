use std::sync::Arc;
use crate::domain::ports::{ArtistRepository, ShowRepository, VenueRepository};
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub venue_repo: Arc<dyn VenueRepository>,
    pub artist_repo: Arc<dyn ArtistRepository>,
    pub show_repo: Arc<dyn ShowRepository>,
    pub templates: Arc<Tera>,
}
