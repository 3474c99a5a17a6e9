pub mod entity_id;
pub mod flash;
