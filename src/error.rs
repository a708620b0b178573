//! Error types for IAIQ.

use thiserror::Error;

/// Common error type for IAIQ.
#[derive(Error, Debug)]
pub enum IaiqError {
    /// Configuration error (missing or weak JWT secret, unreadable config).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The token signature is valid but the token has expired.
    #[error("token has expired")]
    TokenExpired,

    /// The token could not be parsed or its signature did not verify.
    #[error("malformed token: {0}")]
    TokenMalformed(String),

    /// No member matches the subject of a valid token.
    #[error("no member found for token subject")]
    IdentityNotFound,

    /// No identity is bound to the current request.
    #[error("authentication required")]
    Unauthenticated,

    /// The acting member does not own the resource.
    #[error("member {actor_id} is not the owner of this resource")]
    NotResourceOwner {
        /// ID of the member attempting the operation.
        actor_id: i64,
    },

    /// Resource not found.
    #[error("{0} not found")]
    ResourceNotFound(&'static str),

    /// Board category not found by topic.
    #[error("board category not found: {0}")]
    CategoryNotFound(String),

    /// Login failed.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A search date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Uniqueness conflict (duplicate email, duplicate topic).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected internal failure (password hashing, token signing).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for IaiqError {
    fn from(e: sqlx::Error) -> Self {
        IaiqError::Database(e.to_string())
    }
}

/// Result type alias for IAIQ operations.
pub type Result<T> = std::result::Result<T, IaiqError>;
