//! Board repository for IAIQ.

use sqlx::SqliteConnection;

use super::types::{Board, BoardUpdate, BoardView, NewBoard, Pagination};
use crate::Result;

const BOARD_COLUMNS: &str = "id, title, content, category_id, member_id, created_at, updated_at";

const VIEW_SELECT: &str = r#"
SELECT b.id, b.title, b.content, c.topic,
       m.id AS author_id, m.nickname AS author_nickname,
       b.created_at, b.updated_at
FROM boards b
JOIN board_categories c ON c.id = b.category_id
JOIN members m ON m.id = b.member_id
"#;

/// Repository for board posts.
pub struct BoardRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> BoardRepository<'c> {
    /// Create a repository over a connection or transaction.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a board and return the stored row.
    pub async fn save(&mut self, board: &NewBoard) -> Result<Board> {
        let sql = format!(
            "INSERT INTO boards (title, content, category_id, member_id) VALUES (?, ?, ?, ?) \
             RETURNING {BOARD_COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Board>(&sql)
            .bind(&board.title)
            .bind(&board.content)
            .bind(board.category_id)
            .bind(board.member_id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(saved)
    }

    /// Get a board by ID.
    pub async fn find_by_id(&mut self, id: i64) -> Result<Option<Board>> {
        let sql = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?");
        let board = sqlx::query_as::<_, Board>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(board)
    }

    /// Get a board joined with its topic and author.
    pub async fn find_view_by_id(&mut self, id: i64) -> Result<Option<BoardView>> {
        let sql = format!("{VIEW_SELECT} WHERE b.id = ?");
        let view = sqlx::query_as::<_, BoardView>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(view)
    }

    /// Replace title, content and category, bumping `updated_at`.
    ///
    /// Returns true if a row was changed.
    pub async fn update(&mut self, id: i64, update: &BoardUpdate) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE boards SET title = ?, content = ?, category_id = ?, \
             updated_at = datetime('now') WHERE id = ?",
        )
        .bind(&update.title)
        .bind(&update.content)
        .bind(update.category_id)
        .bind(id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a board. Returns true if a row was removed.
    pub async fn delete_by_id(&mut self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List boards in a category, newest first.
    pub async fn list_views_by_category(
        &mut self,
        category_id: i64,
        pagination: Pagination,
    ) -> Result<Vec<BoardView>> {
        let sql = format!(
            "{VIEW_SELECT} WHERE b.category_id = ? ORDER BY b.created_at DESC, b.id DESC LIMIT ? OFFSET ?"
        );
        let views = sqlx::query_as::<_, BoardView>(&sql)
            .bind(category_id)
            .bind(pagination.limit)
            .bind(pagination.offset)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(views)
    }

    /// Count boards in a category.
    pub async fn count_by_category(&mut self, category_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE category_id = ?")
            .bind(category_id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}
