//! Member signup and login.

use tracing::info;
use validator::ValidateEmail;

use super::password::{hash_password, verify_password};
use super::token::TokenProvider;
use crate::db::{DbPool, Member, MemberRepository, NewMember};
use crate::{IaiqError, Result};

/// Maximum nickname length (in characters).
pub const MAX_NICKNAME_LENGTH: usize = 20;

/// Signup request data.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    /// Login email.
    pub email: String,
    /// Plain password (8-128 characters).
    pub password: String,
    /// Display name (1-20 characters).
    pub nickname: String,
}

impl SignupRequest {
    /// Create a new signup request.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            nickname: nickname.into(),
        }
    }
}

/// Register a new member.
///
/// Fails with `Validation` for a bad email, nickname or password and with
/// `Conflict` when the email is taken.
pub async fn signup(pool: &DbPool, request: SignupRequest) -> Result<Member> {
    let email = request.email.trim();
    if !email.validate_email() {
        return Err(IaiqError::Validation("invalid email address".to_string()));
    }
    let nickname = request.nickname.trim();
    if nickname.is_empty() || nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(IaiqError::Validation(format!(
            "nickname must be 1-{MAX_NICKNAME_LENGTH} characters"
        )));
    }

    let repo = MemberRepository::new(pool);
    if repo.email_exists(email).await? {
        return Err(IaiqError::Conflict("email already registered".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let member = repo
        .create(&NewMember::new(email, password_hash, nickname))
        .await?;

    info!("Registered member {} ({})", member.id, member.email);
    Ok(member)
}

/// Check credentials and issue an access token for the member's email.
///
/// Unknown emails and wrong passwords both yield `InvalidCredentials`.
pub async fn login(
    pool: &DbPool,
    tokens: &TokenProvider,
    email: &str,
    password: &str,
) -> Result<(Member, String)> {
    let member = MemberRepository::new(pool)
        .find_by_email(email.trim())
        .await?
        .ok_or(IaiqError::InvalidCredentials)?;

    verify_password(password, &member.password)?;

    let token = tokens.issue(&member.email)?;
    info!("Member {} logged in", member.id);
    Ok((member, token))
}
