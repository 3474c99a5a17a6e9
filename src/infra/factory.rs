use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::templates::build_templates;
use crate::infra::repositories::{
    postgres_artist_repo::PostgresArtistRepo, postgres_show_repo::PostgresShowRepo,
    postgres_venue_repo::PostgresVenueRepo,
    sqlite_artist_repo::SqliteArtistRepo, sqlite_show_repo::SqliteShowRepo,
    sqlite_venue_repo::SqliteVenueRepo,
};

/// Connects the store named by `config.database_url`, brings its schema up to
/// date and wires the repositories and templates together.
pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let templates = Arc::new(build_templates()?);

    if config.is_postgres() {
        info!("Initializing PostgreSQL connection...");

        let opts = PgConnectOptions::from_str(&config.database_url)?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await?;

        run_postgres_migrations(&pool).await?;

        Ok(AppState {
            venue_repo: Arc::new(PostgresVenueRepo::new(pool.clone())),
            artist_repo: Arc::new(PostgresArtistRepo::new(pool.clone())),
            show_repo: Arc::new(PostgresShowRepo::new(pool)),
            templates,
        })
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let pool = connect_sqlite(&config.database_url).await?;
        run_sqlite_migrations(&pool).await?;

        Ok(sqlite_state(pool, templates))
    }
}

/// SQLite pool with WAL journaling. Foreign keys are on for every connection.
pub async fn connect_sqlite(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    Ok(SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?)
}

pub fn sqlite_state(pool: SqlitePool, templates: Arc<tera::Tera>) -> AppState {
    AppState {
        venue_repo: Arc::new(SqliteVenueRepo::new(pool.clone())),
        artist_repo: Arc::new(SqliteArtistRepo::new(pool.clone())),
        show_repo: Arc::new(SqliteShowRepo::new(pool)),
        templates,
    }
}

async fn run_postgres_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Postgres migrations failed: {}", e)))
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("SQLite migrations failed: {}", e)))
}
