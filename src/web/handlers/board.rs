//! Board and category handlers for Web API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::board::{BoardCommandService, BoardQueryService, EditBoard, WriteBoard};
use crate::web::dto::{
    ApiResponse, BoardRequest, BoardResponse, BoardResultResponse, CategoryResponse,
    CreateCategoryRequest, PaginatedResponse, PaginationQuery, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::CurrentMember;

/// GET /api/categories - List categories.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponse>>>, ApiError> {
    let categories = BoardQueryService::new(&state.db).list_categories().await?;
    let responses = categories.into_iter().map(CategoryResponse::from).collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// POST /api/categories - Create a category.
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    current: CurrentMember,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponse>>), ApiError> {
    let category = BoardCommandService::new(&state.db)
        .create_category(current.context(), &req.topic)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(CategoryResponse::from(category))),
    ))
}

/// GET /api/categories/:topic/boards - List boards in a category, newest first.
pub async fn list_boards_by_topic(
    State(state): State<Arc<AppState>>,
    Path(topic): Path<String>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<BoardResponse>>, ApiError> {
    let page = BoardQueryService::new(&state.db)
        .list_by_topic(&topic, pagination.to_pagination())
        .await?;

    Ok(Json(PaginatedResponse::from_result(
        page,
        BoardResponse::from,
    )))
}

/// POST /api/boards - Write a board.
pub async fn write_board(
    State(state): State<Arc<AppState>>,
    current: CurrentMember,
    ValidatedJson(req): ValidatedJson<BoardRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BoardResultResponse>>), ApiError> {
    let input = WriteBoard {
        topic: req.topic,
        title: req.title,
        content: req.content,
    };
    let result = BoardCommandService::new(&state.db)
        .write_board(current.context(), &input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(BoardResultResponse::from(result))),
    ))
}

/// GET /api/boards/:id - Get a board.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiError> {
    let view = BoardQueryService::new(&state.db).get_board(board_id).await?;
    Ok(Json(ApiResponse::new(BoardResponse::from(view))))
}

/// PATCH /api/boards/:id - Edit a board owned by the caller.
pub async fn edit_board(
    State(state): State<Arc<AppState>>,
    current: CurrentMember,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<BoardRequest>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiError> {
    let input = EditBoard {
        topic: req.topic,
        title: req.title,
        content: req.content,
    };
    let view = BoardCommandService::new(&state.db)
        .edit_board(current.context(), board_id, &input)
        .await?;

    Ok(Json(ApiResponse::new(BoardResponse::from(view))))
}

/// DELETE /api/boards/:id - Delete a board owned by the caller.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    current: CurrentMember,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<BoardResultResponse>>, ApiError> {
    let result = BoardCommandService::new(&state.db)
        .delete_board(current.context(), board_id)
        .await?;

    Ok(Json(ApiResponse::new(BoardResultResponse::from(result))))
}
