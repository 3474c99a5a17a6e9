use serde::Serialize;
use sqlx::FromRow;

/// A distinct `(city, state)` pair used to group listing pages.
#[derive(Debug, Serialize, FromRow, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
}
