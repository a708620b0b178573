//! API handlers.

pub mod auth;
pub mod board;
pub mod question;

pub use auth::*;
pub use board::*;
pub use question::*;
