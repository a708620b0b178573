//! API error handling for the IAIQ HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::IaiqError;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed request (400).
    BadRequest,
    /// Search date could not be parsed (400).
    InvalidDate,
    /// Missing or unusable credentials (401).
    Unauthorized,
    /// Token signature valid but expired (401).
    TokenExpired,
    /// Token could not be parsed or verified (401).
    TokenMalformed,
    /// Caller does not own the board (403).
    NotBoardAuthor,
    /// Generic not found (404).
    NotFound,
    /// Token subject has no member (404).
    MemberNotFound,
    /// Board not found (404).
    BoardNotFound,
    /// Category not found (404).
    CategoryNotFound,
    /// Duplicate email or topic (409).
    Conflict,
    /// Validation error (422).
    ValidationError,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest | ErrorCode::InvalidDate => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized | ErrorCode::TokenExpired | ErrorCode::TokenMalformed => {
                StatusCode::UNAUTHORIZED
            }
            ErrorCode::NotBoardAuthor => StatusCode::FORBIDDEN,
            ErrorCode::NotFound
            | ErrorCode::MemberNotFound
            | ErrorCode::BoardNotFound
            | ErrorCode::CategoryNotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Field-level validation error details (only present for validation errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    details: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Error code of this error.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Create a validation error from validator::ValidationErrors.
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let mut details: HashMap<String, Vec<String>> = HashMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
                .collect();
            details.insert(field.to_string(), messages);
        }

        Self {
            code: ErrorCode::ValidationError,
            message: "Validation failed".to_string(),
            details: Some(details),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<IaiqError> for ApiError {
    fn from(err: IaiqError) -> Self {
        let code = match &err {
            IaiqError::TokenExpired => ErrorCode::TokenExpired,
            IaiqError::TokenMalformed(_) => ErrorCode::TokenMalformed,
            IaiqError::Unauthenticated | IaiqError::InvalidCredentials => ErrorCode::Unauthorized,
            IaiqError::IdentityNotFound => ErrorCode::MemberNotFound,
            IaiqError::NotResourceOwner { .. } => ErrorCode::NotBoardAuthor,
            IaiqError::ResourceNotFound("board") => ErrorCode::BoardNotFound,
            IaiqError::ResourceNotFound(_) => ErrorCode::NotFound,
            IaiqError::CategoryNotFound(_) => ErrorCode::CategoryNotFound,
            IaiqError::Conflict(_) => ErrorCode::Conflict,
            IaiqError::InvalidDate(_) => ErrorCode::InvalidDate,
            IaiqError::Validation(_) => ErrorCode::ValidationError,
            IaiqError::Configuration(_)
            | IaiqError::Database(_)
            | IaiqError::Io(_)
            | IaiqError::Internal(_) => {
                tracing::error!("Internal error: {}", err);
                return ApiError::internal("An internal error occurred");
            }
        };
        ApiError::new(code, err.to_string())
    }
}
