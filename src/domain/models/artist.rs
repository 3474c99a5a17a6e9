use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Json<Vec<String>>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn apply(&mut self, input: ArtistInput) {
        self.name = input.name;
        self.city = input.city;
        self.state = input.state;
        self.phone = input.phone;
        self.image_link = input.image_link;
        self.website = input.website;
        self.facebook_link = input.facebook_link;
        self.genres = Json(input.genres);
        self.seeking_venue = input.seeking_venue;
        self.seeking_description = input.seeking_description;
    }
}
