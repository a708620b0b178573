//! Response DTOs for Web API.

use serde::Serialize;

use crate::auth::AuthenticatedIdentity;
use crate::board::{BoardCategory, BoardResult, BoardView, PaginatedResult};
use crate::db::Member;
use crate::question::{Answer, AnswerView, Question};

// ============================================================================
// Generic Response Wrappers
// ============================================================================

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Response data.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Items skipped.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
    /// Total number of items.
    pub total: i64,
    /// Whether another page follows.
    pub has_more: bool,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Build a response from a paginated result, converting each item.
    pub fn from_result<U>(result: PaginatedResult<U>, convert: impl Fn(U) -> T) -> Self {
        let has_more = result.has_more();
        Self {
            meta: PaginationMeta {
                offset: result.offset,
                limit: result.limit,
                total: result.total,
                has_more,
            },
            data: result.items.into_iter().map(convert).collect(),
        }
    }
}

// ============================================================================
// Auth DTOs
// ============================================================================

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Access token (JWT).
    pub access_token: String,
    /// Always "Bearer".
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Member information in responses.
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub created_at: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            email: member.email.clone(),
            nickname: member.nickname.clone(),
            created_at: member.created_at.clone(),
        }
    }
}

/// Current identity response (for /api/auth/me).
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// Member ID.
    pub id: i64,
    /// Login email (token subject).
    pub email: String,
    /// Nickname.
    pub nickname: String,
    /// Granted authorities.
    pub authorities: Vec<String>,
}

impl From<&AuthenticatedIdentity> for MeResponse {
    fn from(identity: &AuthenticatedIdentity) -> Self {
        Self {
            id: identity.member_id(),
            email: identity.email().to_string(),
            nickname: identity.member().nickname.clone(),
            authorities: identity.authorities().to_vec(),
        }
    }
}

// ============================================================================
// Board DTOs
// ============================================================================

/// Category response.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub topic: String,
    pub created_at: String,
}

impl From<BoardCategory> for CategoryResponse {
    fn from(category: BoardCategory) -> Self {
        Self {
            id: category.id,
            topic: category.topic,
            created_at: category.created_at,
        }
    }
}

/// Author information.
#[derive(Debug, Serialize)]
pub struct AuthorInfo {
    /// Member ID.
    pub id: i64,
    /// Nickname.
    pub nickname: String,
}

/// Board response.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Board ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Category topic.
    pub topic: String,
    /// Author.
    pub author: AuthorInfo,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl From<BoardView> for BoardResponse {
    fn from(view: BoardView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            content: view.content,
            topic: view.topic,
            author: AuthorInfo {
                id: view.author_id,
                nickname: view.author_nickname,
            },
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

/// Result of a board write or delete.
#[derive(Debug, Serialize)]
pub struct BoardResultResponse {
    /// Board ID.
    pub board_id: i64,
    /// Creation timestamp (writes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<BoardResult> for BoardResultResponse {
    fn from(result: BoardResult) -> Self {
        Self {
            board_id: result.board_id,
            created_at: result.created_at,
        }
    }
}

// ============================================================================
// Question DTOs
// ============================================================================

/// Question response.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            content: question.content,
            created_at: question.created_at,
        }
    }
}

/// Answer response.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    /// Answer ID.
    pub id: i64,
    /// Answered question.
    pub question_id: i64,
    /// Question text (search results only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Answer text.
    pub content: String,
    /// Day of the answer (YYYY-MM-DD).
    pub answer_date: String,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            question_id: answer.question_id,
            question: None,
            content: answer.content,
            answer_date: answer.answer_date,
        }
    }
}

impl From<AnswerView> for AnswerResponse {
    fn from(view: AnswerView) -> Self {
        Self {
            id: view.id,
            question_id: view.question_id,
            question: Some(view.question_content),
            content: view.content,
            answer_date: view.answer_date,
        }
    }
}
