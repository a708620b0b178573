//! Request DTOs for Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::{no_control_chars, not_empty_trimmed};

/// Signup request.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email.
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, max = 128, message = "Must be 8-128 characters"))]
    pub password: String,
    /// Nickname.
    #[validate(
        length(min = 1, max = 20, message = "Must be 1-20 characters"),
        custom(function = "not_empty_trimmed")
    )]
    pub nickname: String,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Create category request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Topic name.
    #[validate(
        length(min = 1, max = 30, message = "Must be 1-30 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub topic: String,
}

/// Write or edit board request.
#[derive(Debug, Deserialize, Validate)]
pub struct BoardRequest {
    /// Category topic.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub topic: String,
    /// Title.
    #[validate(
        length(min = 1, max = 100, message = "Must be 1-100 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    /// Body.
    #[validate(
        length(min = 1, max = 10000, message = "Must be 1-10000 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub content: String,
}

/// Create question request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    /// Question text.
    #[validate(
        length(min = 1, max = 500, message = "Must be 1-500 characters"),
        custom(function = "not_empty_trimmed")
    )]
    pub content: String,
}

/// Write answer request.
#[derive(Debug, Deserialize, Validate)]
pub struct WriteAnswerRequest {
    /// Answer text.
    #[validate(
        length(min = 1, max = 2000, message = "Must be 1-2000 characters"),
        custom(function = "not_empty_trimmed")
    )]
    pub content: String,
}

/// Answer search query (`?year=&month=&day=`).
#[derive(Debug, Deserialize)]
pub struct AnswerSearchQuery {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
}

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl PaginationQuery {
    /// Convert to an offset/limit pair.
    pub fn to_pagination(&self) -> crate::board::Pagination {
        let per_page = self.per_page.clamp(1, 100) as i64;
        let page = self.page.max(1) as i64;
        crate::board::Pagination::new((page - 1) * per_page, per_page)
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}
