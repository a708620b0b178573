//! Middleware for Web API.

pub mod auth;
pub mod cors;

pub use auth::{bearer_token, CurrentMember};
pub use cors::create_cors_layer;
