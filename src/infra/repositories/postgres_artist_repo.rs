use crate::domain::{
    models::{area::Area, artist::{Artist, ArtistInput}},
    ports::ArtistRepository,
};
use crate::error::AppError;
use crate::infra::repositories::fold_name;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

pub struct PostgresArtistRepo {
    pool: PgPool,
}

impl PostgresArtistRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistRepository for PostgresArtistRepo {
    async fn create(&self, input: &ArtistInput) -> Result<Artist, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let created = sqlx::query_as::<_, Artist>(
            r#"INSERT INTO artists (
                name, city, state, phone, image_link, website,
                facebook_link, genres, seeking_venue, seeking_description, name_folded
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *"#
        )
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(Json(&input.genres))
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(fold_name(&input.name))
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, AppError> {
        sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_areas(&self) -> Result<Vec<Area>, AppError> {
        sqlx::query_as::<_, Area>("SELECT DISTINCT city, state FROM artists ORDER BY city ASC, state ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_area(&self, city: &str, state: &str) -> Result<Vec<Artist>, AppError> {
        sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE city = $1 AND state = $2 ORDER BY id ASC")
            .bind(city)
            .bind(state)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, AppError> {
        sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE strpos(name_folded, $1) > 0 ORDER BY id ASC")
            .bind(fold_name(term))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM artists")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, artist: &Artist) -> Result<Artist, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let updated = sqlx::query_as::<_, Artist>(
            r#"UPDATE artists SET
                name=$1, city=$2, state=$3, phone=$4, image_link=$5, website=$6,
                facebook_link=$7, genres=$8, seeking_venue=$9, seeking_description=$10, name_folded=$11
               WHERE id=$12 RETURNING *"#
        )
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(&artist.image_link)
            .bind(&artist.website)
            .bind(&artist.facebook_link)
            .bind(&artist.genres)
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .bind(fold_name(&artist.name))
            .bind(artist.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", artist.id)))?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }
}
