//! Board and category models for IAIQ.

use crate::auth::OwnedResource;

/// A board category, addressed by its unique topic.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BoardCategory {
    /// Unique category ID.
    pub id: i64,
    /// Topic name (unique).
    pub topic: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// A board post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Category the post belongs to.
    pub category_id: i64,
    /// Owning member.
    pub member_id: i64,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl OwnedResource for Board {
    fn owner_id(&self) -> i64 {
        self.member_id
    }
}

/// Data for inserting a board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Category ID.
    pub category_id: i64,
    /// Owning member ID.
    pub member_id: i64,
}

impl NewBoard {
    /// Create a new board record.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category_id: i64,
        member_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category_id,
            member_id,
        }
    }
}

/// Replacement values applied by an edit.
#[derive(Debug, Clone)]
pub struct BoardUpdate {
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
    /// New category ID.
    pub category_id: i64,
}

/// Board joined with its category topic and author nickname.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BoardView {
    /// Board ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Category topic.
    pub topic: String,
    /// Author member ID.
    pub author_id: i64,
    /// Author nickname.
    pub author_nickname: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Input for writing a board.
#[derive(Debug, Clone)]
pub struct WriteBoard {
    /// Topic of an existing category.
    pub topic: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// Input for editing a board. All fields are replaced.
#[derive(Debug, Clone)]
pub struct EditBoard {
    /// Topic of an existing category.
    pub topic: String,
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
}

/// Result of a create or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResult {
    /// ID of the created or deleted board.
    pub board_id: i64,
    /// Creation timestamp (absent for deletes).
    pub created_at: Option<String>,
}

/// Pagination parameters.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Number of items to skip.
    pub offset: i64,
    /// Maximum number of items to return.
    pub limit: i64,
}

impl Pagination {
    /// Create new pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Pagination for the first page with the given limit.
    pub fn first(limit: i64) -> Self {
        Self { offset: 0, limit }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first(20)
    }
}

/// Result of a paginated query.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total number of items (across all pages).
    pub total: i64,
    /// Current offset.
    pub offset: i64,
    /// Limit used for this query.
    pub limit: i64,
}

impl<T> PaginatedResult<T> {
    /// Check if there are more items after this page.
    pub fn has_more(&self) -> bool {
        self.offset + (self.items.len() as i64) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_owner() {
        let board = Board {
            id: 1,
            title: "t".to_string(),
            content: "c".to_string(),
            category_id: 1,
            member_id: 9,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(board.owner_id(), 9);
    }

    #[test]
    fn test_paginated_has_more() {
        let page = PaginatedResult {
            items: vec![1, 2],
            total: 5,
            offset: 0,
            limit: 2,
        };
        assert!(page.has_more());

        let last = PaginatedResult {
            items: vec![5],
            total: 5,
            offset: 4,
            limit: 2,
        };
        assert!(!last.has_more());
    }
}
