use crate::domain::{
    models::{area::Area, venue::{Venue, VenueInput}},
    ports::VenueRepository,
};
use crate::error::AppError;
use crate::infra::repositories::fold_name;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

pub struct PostgresVenueRepo {
    pool: PgPool,
}

impl PostgresVenueRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for PostgresVenueRepo {
    async fn create(&self, input: &VenueInput) -> Result<Venue, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let created = sqlx::query_as::<_, Venue>(
            r#"INSERT INTO venues (
                name, city, state, address, phone, image_link, website,
                facebook_link, genres, seeking_talent, seeking_description, name_folded
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
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
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
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
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE city = $1 AND state = $2 ORDER BY id ASC")
            .bind(city)
            .bind(state)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE strpos(name_folded, $1) > 0 ORDER BY id ASC")
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
                name=$1, city=$2, state=$3, address=$4, phone=$5, image_link=$6,
                website=$7, facebook_link=$8, genres=$9, seeking_talent=$10, seeking_description=$11, name_folded=$12
               WHERE id=$13 RETURNING *"#
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
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
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
