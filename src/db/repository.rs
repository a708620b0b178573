//! Member repository for IAIQ.

use super::member::{Member, NewMember};
use super::DbPool;
use crate::{IaiqError, Result};

/// Repository for member lookups and creation.
pub struct MemberRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new MemberRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new member.
    ///
    /// Returns `Conflict` if the email is already registered.
    pub async fn create(&self, new_member: &NewMember) -> Result<Member> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO members (email, password, nickname) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&new_member.email)
        .bind(&new_member.password)
        .bind(&new_member.nickname)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                IaiqError::Conflict("email already registered".to_string())
            }
            other => IaiqError::from(other),
        })?;

        self.get_by_id(id)
            .await?
            .ok_or(IaiqError::ResourceNotFound("member"))
    }

    /// Get a member by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, email, password, nickname, created_at FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(member)
    }

    /// Find a member by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, email, password, nickname, created_at FROM members WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(member)
    }

    /// Check whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
