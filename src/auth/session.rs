//! Request-scoped authenticated identity.
//!
//! A [`RequestContext`] is created per request and passed explicitly down the
//! call chain. [`SessionBinder`] is the only way to put an identity in it, and
//! it does so only for tokens that passed validation.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::token::TokenProvider;
use crate::db::{DbPool, Member, MemberRepository};
use crate::logging::mask_token;
use crate::{IaiqError, Result};

/// An authenticated member bound to one request.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    token: String,
    member: Member,
    authorities: Vec<String>,
}

impl AuthenticatedIdentity {
    /// Identities come from validated tokens; authorities are not modelled yet.
    pub(crate) fn new(token: impl Into<String>, member: Member) -> Self {
        Self {
            token: token.into(),
            member,
            authorities: Vec::new(),
        }
    }

    /// The raw token this identity was resolved from.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The resolved member record.
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// Shorthand for `member().id`.
    pub fn member_id(&self) -> i64 {
        self.member.id
    }

    /// Shorthand for `member().email`.
    pub fn email(&self) -> &str {
        &self.member.email
    }

    /// Granted authorities. Always empty.
    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }
}

/// Per-request holder of the current identity.
#[derive(Debug, Default)]
pub struct RequestContext {
    identity: Option<AuthenticatedIdentity>,
}

impl RequestContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `identity`, replacing any prior binding.
    pub(crate) fn bind(&mut self, identity: AuthenticatedIdentity) {
        if let Some(previous) = self.identity.replace(identity) {
            debug!("Replaced identity binding for member {}", previous.member_id());
        }
    }

    /// The identity bound to this request, if any.
    pub fn current_identity(&self) -> Option<&AuthenticatedIdentity> {
        self.identity.as_ref()
    }

    /// The identity bound to this request, or `Unauthenticated`.
    pub fn require_identity(&self) -> Result<&AuthenticatedIdentity> {
        self.identity.as_ref().ok_or(IaiqError::Unauthenticated)
    }

    /// Consume the context, yielding the bound identity.
    pub fn into_identity(self) -> Option<AuthenticatedIdentity> {
        self.identity
    }
}

/// Resolves tokens to members and binds them into a [`RequestContext`].
pub struct SessionBinder<'a> {
    tokens: &'a TokenProvider,
    pool: &'a DbPool,
}

impl<'a> SessionBinder<'a> {
    /// Create a binder over the token provider and member store.
    pub fn new(tokens: &'a TokenProvider, pool: &'a DbPool) -> Self {
        Self { tokens, pool }
    }

    /// Validate `token`, resolve its subject and bind the member into `ctx`.
    pub async fn bind_session(&self, ctx: &mut RequestContext, token: &str) -> Result<()> {
        self.bind_session_at(ctx, token, Utc::now()).await
    }

    /// As [`bind_session`](Self::bind_session), validating expiry at `now`.
    ///
    /// On failure `ctx` is left untouched.
    pub async fn bind_session_at(
        &self,
        ctx: &mut RequestContext,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        debug!("Binding session for token {}", mask_token(token));
        let email = self.tokens.extract_subject_at(token, now)?;

        let member = MemberRepository::new(self.pool)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Valid token for unknown member {}", email);
                IaiqError::IdentityNotFound
            })?;

        ctx.bind(AuthenticatedIdentity::new(token, member));
        Ok(())
    }
}
