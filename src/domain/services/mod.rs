pub mod datetime;
pub mod defaults;
pub mod detail;
pub mod listing;
pub mod search;
pub mod validation;
