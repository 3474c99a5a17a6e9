use crate::domain::{
    models::{area::Area, venue::{Venue, VenueInput}},
    ports::VenueRepository,
};
use crate::error::AppError;
use crate::infra::repositories::fold_name;
use async_trait::async_trait;
use sqlx::{types::Json, SqlitePool};

pub struct SqliteVenueRepo {
    pool: SqlitePool,
}

impl SqliteVenueRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for SqliteVenueRepo {
    async fn create(&self, input: &VenueInput) -> Result<Venue, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let created = sqlx::query_as::<_, Venue>(
            r#"INSERT INTO venues (
                name, city, state, address, phone, image_link, website,
                facebook_link, genres, seeking_talent, seeking_description, name_folded
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(Json(&input.genres))
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(fold_name(&input.name))
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_areas(&self) -> Result<Vec<Area>, AppError> {
        sqlx::query_as::<_, Area>("SELECT DISTINCT city, state FROM venues ORDER BY city ASC, state ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_area(&self, city: &str, state: &str) -> Result<Vec<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE city = ? AND state = ? ORDER BY id ASC")
            .bind(city)
            .bind(state)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE instr(name_folded, ?) > 0 ORDER BY id ASC")
            .bind(fold_name(term))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venues")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, venue: &Venue) -> Result<Venue, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let updated = sqlx::query_as::<_, Venue>(
            r#"UPDATE venues SET
                name=?, city=?, state=?, address=?, phone=?, image_link=?,
                website=?, facebook_link=?, genres=?, seeking_talent=?, seeking_description=?, name_folded=?
               WHERE id=? RETURNING *"#
        )
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(&venue.image_link)
            .bind(&venue.website)
            .bind(&venue.facebook_link)
            .bind(&venue.genres)
            .bind(venue.seeking_talent)
            .bind(&venue.seeking_description)
            .bind(fold_name(&venue.name))
            .bind(venue.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", venue.id)))?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let result = sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Venue {} not found", id)));
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
