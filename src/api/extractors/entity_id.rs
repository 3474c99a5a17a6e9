use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use crate::error::AppError;

/// Numeric `{id}` path segment. Anything that is not an id cannot name an
/// entity, so it is rejected as not found.
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Missing id".into()))?;

        raw.parse::<i64>()
            .map(EntityId)
            .map_err(|_| AppError::NotFound(format!("'{}' is not an id", raw)))
    }
}
