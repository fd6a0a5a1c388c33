pub mod error;
pub mod params;
pub mod projector;
pub mod query;
pub mod render;
pub mod row;
