//! Web API module for IAIQ.
//!
//! REST endpoints for accounts, boards, categories, questions and answers.
//! Protected endpoints take a bearer token resolved per request.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
