pub mod sqlite_venue_repo;
pub mod sqlite_artist_repo;
pub mod sqlite_show_repo;

pub mod postgres_venue_repo;
pub mod postgres_artist_repo;
pub mod postgres_show_repo;

/// Shared projection for show rows joined with their venue and artist.
/// Callers append their own `WHERE` and `ORDER BY`.
pub(crate) const SHOW_LISTING_SELECT: &str = "SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
     s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time \
     FROM shows s \
     JOIN venues v ON v.id = s.venue_id \
     JOIN artists a ON a.id = s.artist_id";

/// Lowercased copy of a name, stored beside it for case-insensitive search.
/// Searches look the folded term up with a plain substring test, so the
/// term never acts as a pattern.
pub(crate) fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
