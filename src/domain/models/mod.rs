pub mod area;
pub mod artist;
pub mod show;
pub mod venue;
