//! Question and answer handlers for Web API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::question::{QuestionService, SearchCondition};
use crate::web::dto::{
    AnswerResponse, AnswerSearchQuery, ApiResponse, CreateQuestionRequest, QuestionResponse,
    ValidatedJson, WriteAnswerRequest,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::CurrentMember;

/// POST /api/questions - Create a question.
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    current: CurrentMember,
    ValidatedJson(req): ValidatedJson<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<QuestionResponse>>), ApiError> {
    let question = QuestionService::new(&state.db)
        .create_question(current.context(), &req.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(QuestionResponse::from(question))),
    ))
}

/// GET /api/questions/:id - Get a question.
pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(question_id): Path<i64>,
) -> Result<Json<ApiResponse<QuestionResponse>>, ApiError> {
    let question = QuestionService::new(&state.db)
        .get_question(question_id)
        .await?;
    Ok(Json(ApiResponse::new(QuestionResponse::from(question))))
}

/// POST /api/questions/:id/answers - Answer a question for today.
pub async fn write_answer(
    State(state): State<Arc<AppState>>,
    current: CurrentMember,
    Path(question_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<WriteAnswerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AnswerResponse>>), ApiError> {
    let answer = QuestionService::new(&state.db)
        .write_answer(current.context(), question_id, &req.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(AnswerResponse::from(answer))),
    ))
}

/// GET /api/answers?year=&month=&day= - The caller's answers for a day.
pub async fn search_answers(
    State(state): State<Arc<AppState>>,
    current: CurrentMember,
    Query(query): Query<AnswerSearchQuery>,
) -> Result<Json<ApiResponse<Vec<AnswerResponse>>>, ApiError> {
    let condition = SearchCondition::new(query.year, query.month, query.day);
    let answers = QuestionService::new(&state.db)
        .search_answers(current.context(), &condition)
        .await?;

    Ok(Json(ApiResponse::new(
        answers.into_iter().map(AnswerResponse::from).collect(),
    )))
}
