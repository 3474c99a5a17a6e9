use venue_directory::{
    api::router::create_router,
    domain::models::{artist::ArtistInput, show::ShowInput, venue::VenueInput},
    infra::{factory::sqlite_state, templates::build_templates},
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let templates = Arc::new(build_templates().expect("Templates failed to parse"));
        let state = Arc::new(sqlite_state(pool.clone(), templates));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    /// POSTs `fields` url-encoded. Repeated keys are sent as repeated pairs.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn venue_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM venues").fetch_one(&self.pool).await.unwrap()
    }

    pub async fn artist_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM artists").fetch_one(&self.pool).await.unwrap()
    }

    pub async fn show_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM shows").fetch_one(&self.pool).await.unwrap()
    }

    pub async fn seed_venue(&self, name: &str, city: &str, state: &str) -> i64 {
        let input = VenueInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            website: None,
            facebook_link: None,
            genres: vec!["Jazz".to_string()],
            seeking_talent: false,
            seeking_description: None,
        };
        self.state.venue_repo.create(&input).await.unwrap().id
    }

    pub async fn seed_artist(&self, name: &str, city: &str, state: &str) -> i64 {
        let input = ArtistInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            phone: None,
            image_link: Some("https://images.example.com/artist.png".to_string()),
            website: None,
            facebook_link: None,
            genres: vec!["Rock n Roll".to_string()],
            seeking_venue: false,
            seeking_description: None,
        };
        self.state.artist_repo.create(&input).await.unwrap().id
    }

    pub async fn seed_show(&self, venue_id: i64, artist_id: i64, start_time: DateTime<Utc>) -> i64 {
        let input = ShowInput { venue_id, artist_id, start_time };
        self.state.show_repo.create(&input).await.unwrap().id
    }
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `name=value` pair of the first `Set-Cookie` for `name`, ready to send back.
#[allow(dead_code)]
pub fn cookie_pair(response: &Response, name: &str) -> Option<String> {
    response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find(|c| c.starts_with(&format!("{}=", name)))
        .map(|c| c.split(';').next().unwrap_or(c).to_string())
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
