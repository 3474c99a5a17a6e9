use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Json<Vec<String>>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Validated field set for creating or overwriting a venue.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Overwrites every mutable field; `id` is kept.
    pub fn apply(&mut self, input: VenueInput) {
        self.name = input.name;
        self.city = input.city;
        self.state = input.state;
        self.address = input.address;
        self.phone = input.phone;
        self.image_link = input.image_link;
        self.website = input.website;
        self.facebook_link = input.facebook_link;
        self.genres = Json(input.genres);
        self.seeking_talent = input.seeking_talent;
        self.seeking_description = input.seeking_description;
    }
}
