//! Board services for IAIQ.
//!
//! [`BoardCommandService`] runs every mutation inside one transaction that is
//! committed on success and rolled back on drop for every error path.
//! [`BoardQueryService`] serves reads, which need no identity.

use tracing::info;

use crate::auth::{require_owner_of, RequestContext};
use crate::db::Database;
use crate::{IaiqError, Result};

use super::category_repository::CategoryRepository;
use super::repository::BoardRepository;
use super::types::{
    BoardCategory, BoardResult, BoardUpdate, BoardView, EditBoard, NewBoard, PaginatedResult,
    Pagination, WriteBoard,
};

/// Maximum length for board titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for board content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Maximum length for category topics (in characters).
pub const MAX_TOPIC_LENGTH: usize = 30;

/// Largest page size accepted by listings.
pub const MAX_PAGE_SIZE: i64 = 100;

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(IaiqError::Validation("title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(IaiqError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(IaiqError::Validation("content must not be empty".to_string()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(IaiqError::Validation(format!(
            "content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_topic(topic: &str) -> Result<()> {
    if topic.trim().is_empty() || topic.chars().count() > MAX_TOPIC_LENGTH {
        return Err(IaiqError::Validation(format!(
            "topic must be 1-{MAX_TOPIC_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Board mutations: write, edit, delete, and category creation.
pub struct BoardCommandService<'a> {
    db: &'a Database,
}

impl<'a> BoardCommandService<'a> {
    /// Create a new BoardCommandService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a board owned by the current identity.
    ///
    /// Fails with `CategoryNotFound` for an unknown topic and with
    /// `Unauthenticated` when no identity is bound.
    pub async fn write_board(&self, ctx: &RequestContext, input: &WriteBoard) -> Result<BoardResult> {
        validate_title(&input.title)?;
        validate_content(&input.content)?;

        let mut tx = self.db.begin().await?;

        let category = CategoryRepository::new(&mut tx)
            .find_by_topic(&input.topic)
            .await?
            .ok_or_else(|| IaiqError::CategoryNotFound(input.topic.clone()))?;

        let identity = ctx.require_identity()?;

        let board = BoardRepository::new(&mut tx)
            .save(&NewBoard::new(
                &input.title,
                &input.content,
                category.id,
                identity.member_id(),
            ))
            .await?;

        tx.commit().await?;

        info!(
            "Member {} wrote board {} in '{}'",
            identity.member_id(),
            board.id,
            category.topic
        );
        Ok(BoardResult {
            board_id: board.id,
            created_at: Some(board.created_at),
        })
    }

    /// Replace title, content and category of a board owned by the caller.
    ///
    /// Order of checks: board exists, category exists, identity bound,
    /// caller owns the board. Returns the re-fetched board.
    pub async fn edit_board(
        &self,
        ctx: &RequestContext,
        board_id: i64,
        input: &EditBoard,
    ) -> Result<BoardView> {
        validate_title(&input.title)?;
        validate_content(&input.content)?;

        let mut tx = self.db.begin().await?;

        let board = BoardRepository::new(&mut tx)
            .find_by_id(board_id)
            .await?
            .ok_or(IaiqError::ResourceNotFound("board"))?;

        let category = CategoryRepository::new(&mut tx)
            .find_by_topic(&input.topic)
            .await?
            .ok_or_else(|| IaiqError::CategoryNotFound(input.topic.clone()))?;

        let identity = ctx.require_identity()?;
        require_owner_of(identity, &board)?;

        let mut boards = BoardRepository::new(&mut tx);
        boards
            .update(
                board.id,
                &BoardUpdate {
                    title: input.title.clone(),
                    content: input.content.clone(),
                    category_id: category.id,
                },
            )
            .await?;
        let view = boards
            .find_view_by_id(board.id)
            .await?
            .ok_or(IaiqError::ResourceNotFound("board"))?;

        tx.commit().await?;

        info!("Member {} edited board {}", identity.member_id(), board.id);
        Ok(view)
    }

    /// Delete a board owned by the caller.
    pub async fn delete_board(&self, ctx: &RequestContext, board_id: i64) -> Result<BoardResult> {
        let mut tx = self.db.begin().await?;

        let mut boards = BoardRepository::new(&mut tx);
        let board = boards
            .find_by_id(board_id)
            .await?
            .ok_or(IaiqError::ResourceNotFound("board"))?;

        let identity = ctx.require_identity()?;
        require_owner_of(identity, &board)?;

        boards.delete_by_id(board.id).await?;
        tx.commit().await?;

        info!("Member {} deleted board {}", identity.member_id(), board.id);
        Ok(BoardResult {
            board_id: board.id,
            created_at: None,
        })
    }

    /// Create a category. Requires a bound identity.
    pub async fn create_category(&self, ctx: &RequestContext, topic: &str) -> Result<BoardCategory> {
        let topic = topic.trim();
        validate_topic(topic)?;
        let identity = ctx.require_identity()?;

        let mut tx = self.db.begin().await?;
        let category = CategoryRepository::new(&mut tx).create(topic).await?;
        tx.commit().await?;

        info!(
            "Member {} created category '{}'",
            identity.member_id(),
            category.topic
        );
        Ok(category)
    }
}

/// Board reads.
pub struct BoardQueryService<'a> {
    db: &'a Database,
}

impl<'a> BoardQueryService<'a> {
    /// Create a new BoardQueryService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get a board with its topic and author.
    pub async fn get_board(&self, board_id: i64) -> Result<BoardView> {
        let mut conn = self.db.pool().acquire().await?;
        BoardRepository::new(&mut conn)
            .find_view_by_id(board_id)
            .await?
            .ok_or(IaiqError::ResourceNotFound("board"))
    }

    /// List boards under a topic, newest first.
    pub async fn list_by_topic(
        &self,
        topic: &str,
        pagination: Pagination,
    ) -> Result<PaginatedResult<BoardView>> {
        let pagination = Pagination::new(
            pagination.offset.max(0),
            pagination.limit.clamp(1, MAX_PAGE_SIZE),
        );

        let mut conn = self.db.pool().acquire().await?;
        let category = CategoryRepository::new(&mut conn)
            .find_by_topic(topic)
            .await?
            .ok_or_else(|| IaiqError::CategoryNotFound(topic.to_string()))?;

        let mut boards = BoardRepository::new(&mut conn);
        let total = boards.count_by_category(category.id).await?;
        let items = boards
            .list_views_by_category(category.id, pagination)
            .await?;

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }

    /// List all categories.
    pub async fn list_categories(&self) -> Result<Vec<BoardCategory>> {
        let mut conn = self.db.pool().acquire().await?;
        CategoryRepository::new(&mut conn).list().await
    }
}
