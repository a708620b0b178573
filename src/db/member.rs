//! Member model for IAIQ.

/// A registered member.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Member {
    /// Unique member ID.
    pub id: i64,
    /// Login email (unique, case-insensitive). Used as the token subject.
    pub email: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new member.
#[derive(Debug, Clone)]
pub struct NewMember {
    /// Login email.
    pub email: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
    /// Display name.
    pub nickname: String,
}

impl NewMember {
    /// Create a new member record.
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
