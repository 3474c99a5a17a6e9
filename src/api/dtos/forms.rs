use crate::domain::models::{
    artist::{Artist, ArtistInput},
    show::ShowInput,
    venue::{Venue, VenueInput},
};
use crate::domain::services::datetime::parse_timestamp;
use crate::domain::services::validation::{checkbox, FieldError, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submitted venue fields, as posted by the create and edit forms.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(&self) -> Result<VenueInput, Vec<FieldError>> {
        let mut v = Validator::new();
        let input = VenueInput {
            name: v.required("name", &self.name),
            city: v.required("city", &self.city),
            state: v.state("state", &self.state),
            address: v.required("address", &self.address),
            phone: v.phone("phone", &self.phone),
            image_link: v.link("image_link", &self.image_link),
            website: v.link("website_link", &self.website_link),
            facebook_link: v.link("facebook_link", &self.facebook_link),
            genres: v.genres("genres", &self.genres),
            seeking_talent: checkbox(self.seeking_talent.as_deref()),
            seeking_description: v.optional(&self.seeking_description),
        };
        v.finish(input)
    }

    pub fn display_name(&self) -> &str {
        self.name.trim()
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            website_link: venue.website.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            genres: venue.genres.0.clone(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistInput, Vec<FieldError>> {
        let mut v = Validator::new();
        let input = ArtistInput {
            name: v.required("name", &self.name),
            city: v.required("city", &self.city),
            state: v.state("state", &self.state),
            phone: v.phone("phone", &self.phone),
            image_link: v.link("image_link", &self.image_link),
            website: v.link("website_link", &self.website_link),
            facebook_link: v.link("facebook_link", &self.facebook_link),
            genres: v.genres("genres", &self.genres),
            seeking_venue: checkbox(self.seeking_venue.as_deref()),
            seeking_description: v.optional(&self.seeking_description),
        };
        v.finish(input)
    }

    pub fn display_name(&self) -> &str {
        self.name.trim()
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            website_link: artist.website.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            genres: artist.genres.0.clone(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Blank form with `start_time` preset to `now`, in the datetime-local layout.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format("%Y-%m-%dT%H:%M").to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ShowInput, Vec<FieldError>> {
        let mut v = Validator::new();
        let artist_id = v.positive_id("artist_id", &self.artist_id);
        let venue_id = v.positive_id("venue_id", &self.venue_id);
        let start_time = if self.start_time.trim().is_empty() {
            v.push("start_time", "This field is required.");
            None
        } else {
            match parse_timestamp(&self.start_time) {
                Ok(ts) => Some(ts),
                Err(_) => {
                    v.push("start_time", "Not a valid datetime value.");
                    None
                }
            }
        };
        let input = ShowInput {
            artist_id,
            venue_id,
            start_time: start_time.unwrap_or_default(),
        };
        v.finish(input)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn musical_hop() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: "123-123-1234".into(),
            image_link: "https://images.unsplash.com/photo-1543900694".into(),
            website_link: "https://www.themusicalhop.com".into(),
            facebook_link: "https://www.facebook.com/TheMusicalHop".into(),
            genres: vec!["Jazz".into(), "Reggae".into()],
            seeking_talent: Some("y".into()),
            seeking_description: "We are on the lookout for a local artist.".into(),
        }
    }

    #[test]
    fn test_valid_venue_form() {
        let input = musical_hop().validate().unwrap();
        assert_eq!(input.name, "The Musical Hop");
        assert_eq!(input.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert!(input.seeking_talent);
        assert_eq!(input.genres, vec!["Jazz", "Reggae"]);
    }

    #[test]
    fn test_venue_form_reports_every_bad_field() {
        let mut form = musical_hop();
        form.name = " ".into();
        form.address = "".into();
        form.state = "XX".into();
        form.genres.clear();

        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "state", "address", "genres"]);
    }

    #[test]
    fn test_venue_round_trips_through_edit_form() {
        let input = musical_hop().validate().unwrap();
        let mut venue = Venue {
            id: 1,
            name: String::new(),
            city: String::new(),
            state: String::new(),
            address: String::new(),
            phone: None,
            image_link: None,
            website: None,
            facebook_link: None,
            genres: sqlx::types::Json(vec![]),
            seeking_talent: false,
            seeking_description: None,
        };
        venue.apply(input.clone());

        assert_eq!(VenueForm::from(&venue).validate().unwrap(), input);
    }

    #[test]
    fn test_artist_form_without_optional_fields() {
        let form = ArtistForm {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            genres: vec!["Rock n Roll".into()],
            ..ArtistForm::default()
        };
        let input = form.validate().unwrap();
        assert_eq!(input.phone, None);
        assert!(!input.seeking_venue);
        assert_eq!(input.seeking_description, None);
    }

    #[test]
    fn test_show_form() {
        let form = ShowForm {
            artist_id: "4".into(),
            venue_id: "1".into(),
            start_time: "2019-05-21T21:30:00.000Z".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.artist_id, 4);
        assert_eq!(input.venue_id, 1);
        assert_eq!(input.start_time, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap());

        let bad = ShowForm { start_time: "soon".into(), ..form };
        assert_eq!(bad.validate().unwrap_err()[0].field, "start_time");
    }

    #[test]
    fn test_show_form_default_start() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 18, 5, 44).unwrap();
        assert_eq!(ShowForm::starting_at(now).start_time, "2024-03-09T18:05");
    }
}
