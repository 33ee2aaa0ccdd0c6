pub mod api;
pub mod models;
pub mod symbols;
pub mod timestamp;
