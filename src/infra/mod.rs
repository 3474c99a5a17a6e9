pub mod factory;
pub mod repositories;
pub mod templates;
