//! Board category repository for IAIQ.

use sqlx::SqliteConnection;

use super::types::BoardCategory;
use crate::{IaiqError, Result};

/// Repository for board categories.
///
/// Works on a single connection so it can run inside a transaction.
pub struct CategoryRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> CategoryRepository<'c> {
    /// Create a repository over a connection or transaction.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a category. Returns `Conflict` if the topic exists.
    pub async fn create(&mut self, topic: &str) -> Result<BoardCategory> {
        let category = sqlx::query_as::<_, BoardCategory>(
            "INSERT INTO board_categories (topic) VALUES (?) RETURNING id, topic, created_at",
        )
        .bind(topic)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                IaiqError::Conflict(format!("category already exists: {topic}"))
            }
            other => IaiqError::from(other),
        })?;

        Ok(category)
    }

    /// Find a category by topic.
    pub async fn find_by_topic(&mut self, topic: &str) -> Result<Option<BoardCategory>> {
        let category = sqlx::query_as::<_, BoardCategory>(
            "SELECT id, topic, created_at FROM board_categories WHERE topic = ?",
        )
        .bind(topic)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(category)
    }

    /// List all categories by topic.
    pub async fn list(&mut self) -> Result<Vec<BoardCategory>> {
        let categories = sqlx::query_as::<_, BoardCategory>(
            "SELECT id, topic, created_at FROM board_categories ORDER BY topic",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(categories)
    }
}
