//! Board module for IAIQ.
//!
//! This module provides discussion board functionality including:
//! - Categories addressed by topic
//! - Board posts owned by the member who wrote them
//! - Transactional write, edit and delete with ownership checks
//! - Paginated listings, newest first

mod category_repository;
mod repository;
pub mod service;
mod types;

pub use category_repository::CategoryRepository;
pub use repository::BoardRepository;
pub use service::{BoardCommandService, BoardQueryService};
pub use types::{
    Board, BoardCategory, BoardResult, BoardUpdate, BoardView, EditBoard, NewBoard,
    PaginatedResult, Pagination, WriteBoard,
};
