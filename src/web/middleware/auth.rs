//! Bearer token authentication for protected handlers.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;

use crate::auth::{AuthenticatedIdentity, RequestContext, SessionBinder};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Extractor for authenticated members.
///
/// Validates the bearer token and binds the member into a fresh
/// [`RequestContext`] owned by this request. Handlers pass the context on
/// to the services.
#[derive(Debug)]
pub struct CurrentMember(pub RequestContext);

impl CurrentMember {
    /// The request context holding the bound identity.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }

    /// The bound identity.
    pub fn identity(&self) -> Result<&AuthenticatedIdentity, ApiError> {
        Ok(self.0.require_identity()?)
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentMember {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| ApiError::unauthorized("Missing authorization"))?;

        let mut ctx = RequestContext::new();
        SessionBinder::new(&state.tokens, state.db.pool())
            .bind_session(&mut ctx, token)
            .await
            .map_err(|e| {
                tracing::debug!("Session binding failed: {}", e);
                ApiError::from(e)
            })?;

        Ok(CurrentMember(ctx))
    }
}
