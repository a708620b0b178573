//! Router configuration for Web API.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::dto::ApiResponse;
use super::handlers::{
    create_category, create_question, delete_board, edit_board, get_board, get_question,
    list_boards_by_topic, list_categories, login, me, search_answers, signup, write_answer,
    write_board, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
///
/// Protected handlers authenticate through the `CurrentMember` extractor.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let auth_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me));

    let category_routes = Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:topic/boards", get(list_boards_by_topic));

    let board_routes = Router::new()
        .route("/", post(write_board))
        .route("/:id", get(get_board).patch(edit_board).delete(delete_board));

    let question_routes = Router::new()
        .route("/", post(create_question))
        .route("/:id", get(get_question))
        .route("/:id/answers", post(write_answer));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/categories", category_routes)
        .nest("/boards", board_routes)
        .nest("/questions", question_routes)
        .route("/answers", get(search_answers));

    Router::new()
        .nest("/api", api_routes)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::new("OK"))
}
