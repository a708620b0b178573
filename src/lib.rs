//! IAIQ - discussion board backend
//!
//! Members authenticate with short-lived JWT access tokens, write boards
//! under categories, answer daily questions and search their answers by date.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod question;
pub mod web;

pub use auth::{
    derive_key, login, require_owner_of, require_ownership, signup, AuthenticatedIdentity,
    Claims, OwnedResource, RequestContext, SessionBinder, SignupRequest, SigningKey,
    TokenProvider, ACCESS_TOKEN_VALID_SECS,
};
pub use board::{BoardCommandService, BoardQueryService};
pub use config::Config;
pub use db::{Database, Member, MemberRepository, NewMember};
pub use error::{IaiqError, Result};
pub use question::{QuestionService, SearchCondition};
pub use web::WebServer;
