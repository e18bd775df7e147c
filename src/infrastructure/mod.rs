pub mod api;
pub mod observability;
pub mod persistence;
