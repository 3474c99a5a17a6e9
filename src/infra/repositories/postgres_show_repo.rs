use crate::domain::{
    models::show::{Show, ShowInput, ShowListing, ShowTiming},
    ports::ShowRepository,
};
use crate::error::AppError;
use crate::infra::repositories::SHOW_LISTING_SELECT;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresShowRepo {
    pool: PgPool,
}

impl PostgresShowRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowRepository for PostgresShowRepo {
    async fn create(&self, input: &ShowInput) -> Result<Show, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let created = sqlx::query_as::<_, Show>(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES ($1, $2, $3) RETURNING *"
        )
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<ShowListing>, AppError> {
        let sql = format!("{} ORDER BY s.start_time ASC, s.id ASC", SHOW_LISTING_SELECT);
        sqlx::query_as::<_, ShowListing>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_venue(&self, venue_id: i64, timing: ShowTiming, now: DateTime<Utc>) -> Result<Vec<ShowListing>, AppError> {
        let sql = format!(
            "{} WHERE s.venue_id = $1 AND s.start_time {} $2 ORDER BY s.start_time ASC, s.id ASC",
            SHOW_LISTING_SELECT,
            timing.sql_operator()
        );
        sqlx::query_as::<_, ShowListing>(&sql)
            .bind(venue_id)
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_artist(&self, artist_id: i64, timing: ShowTiming, now: DateTime<Utc>) -> Result<Vec<ShowListing>, AppError> {
        let sql = format!(
            "{} WHERE s.artist_id = $1 AND s.start_time {} $2 ORDER BY s.start_time ASC, s.id ASC",
            SHOW_LISTING_SELECT,
            timing.sql_operator()
        );
        sqlx::query_as::<_, ShowListing>(&sql)
            .bind(artist_id)
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_upcoming_by_venue(&self, venue_id: i64, now: DateTime<Utc>) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shows WHERE venue_id = $1 AND start_time > $2")
            .bind(venue_id)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_upcoming_by_artist(&self, artist_id: i64, now: DateTime<Utc>) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shows WHERE artist_id = $1 AND start_time > $2")
            .bind(artist_id)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
