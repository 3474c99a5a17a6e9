use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::{error, warn};

const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");
const SERVER_ERROR_PAGE: &str = include_str!("../templates/errors/500.html");

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl AppError {
    /// True when the store itself could not be reached, as opposed to a
    /// statement it rejected. Handlers recover from the latter locally.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self,
            AppError::Database(
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            )
        )
    }

    /// True when a statement was refused by a foreign key. SQLite reports a
    /// `RESTRICT` refusal as a trigger constraint (1811) that sqlx does not
    /// classify, so the raw codes are checked as well.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            AppError::Database(e) => e
                .as_database_error()
                .map(|db_err| {
                    matches!(db_err.kind(), ErrorKind::ForeignKeyViolation)
                        || db_err.code().is_some_and(|code| is_foreign_key_code(&code))
                })
                .unwrap_or(false),
            _ => false,
        }
    }
}

// SQLite 787 (FOREIGN KEY) and 1811 (TRIGGER, raised by RESTRICT), Postgres 23503.
fn is_foreign_key_code(code: &str) -> bool {
    matches!(code, "787" | "1811" | "23503")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(msg) => {
                warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
            }
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
            AppError::Template(e) => {
                error!("Template error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
            AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
        }
    }
}
