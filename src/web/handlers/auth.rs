//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::auth::{self, TokenProvider, ACCESS_TOKEN_VALID_SECS};
use crate::db::Database;
use crate::web::dto::{
    ApiResponse, LoginRequest, LoginResponse, MeResponse, MemberResponse, SignupRequest,
    ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentMember;

/// Application state shared across handlers.
///
/// Read-only after startup; every request gets its own identity context.
pub struct AppState {
    /// Database pool.
    pub db: Database,
    /// Token issuer and validator.
    pub tokens: TokenProvider,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, tokens: TokenProvider) -> Self {
        Self { db, tokens }
    }
}

/// POST /api/auth/signup - Register a member.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MemberResponse>>), ApiError> {
    let member = auth::signup(
        state.db.pool(),
        auth::SignupRequest::new(req.email, req.password, req.nickname),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(MemberResponse::from(&member))),
    ))
}

/// POST /api/auth/login - Exchange credentials for an access token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let (_, access_token) =
        auth::login(state.db.pool(), &state.tokens, &req.email, &req.password).await?;

    Ok(Json(ApiResponse::new(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: ACCESS_TOKEN_VALID_SECS,
    })))
}

/// GET /api/auth/me - The identity bound to this request.
pub async fn me(current: CurrentMember) -> Result<Json<ApiResponse<MeResponse>>, ApiError> {
    let identity = current.identity()?;
    Ok(Json(ApiResponse::new(MeResponse::from(identity))))
}
