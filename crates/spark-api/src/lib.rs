pub mod anchors;
pub mod auth;
pub mod error;
pub mod messages;
pub mod middleware;
pub mod routes;
pub mod status;
pub mod symbols;
