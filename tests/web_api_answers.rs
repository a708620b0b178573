//! Web API Question/Answer Tests
//!
//! Integration tests for daily questions and answer search by date.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::{create_test_server, signup_and_login};
use serde_json::{json, Value};

async fn create_question(server: &axum_test::TestServer, token: &str, content: &str) -> i64 {
    let response = server
        .post("/api/questions")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "content": content }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_get_question() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    let id = create_question(&server, &token, "What did you learn today?").await;

    let response = server.get(&format!("/api/questions/{}", id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["content"], "What did you learn today?");

    let response = server.get("/api/questions/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_write_answer_and_search_today() {
    let (server, _state) = create_test_server().await;
    let alice = signup_and_login(&server, "alice@example.com", "Alice").await;
    let bob = signup_and_login(&server, "bob@example.com", "Bob").await;
    let question_id = create_question(&server, &alice, "Best moment?").await;

    let response = server
        .post(&format!("/api/questions/{}/answers", question_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", alice))
        .json(&json!({ "content": "Morning coffee" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    server
        .post(&format!("/api/questions/{}/answers", question_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", bob))
        .json(&json!({ "content": "Lunch" }))
        .await
        .assert_status(StatusCode::CREATED);

    let today = Utc::now().date_naive();
    let response = server
        .get("/api/answers")
        .add_header(AUTHORIZATION, format!("Bearer {}", alice))
        .add_query_param("year", format!("{:04}", today.year()))
        .add_query_param("month", format!("{:02}", today.month()))
        .add_query_param("day", format!("{:02}", today.day()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let answers = body["data"].as_array().unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0]["content"], "Morning coffee");
    assert_eq!(answers[0]["question"], "Best moment?");
}

#[tokio::test]
async fn test_search_other_day_is_empty() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    let response = server
        .get("/api/answers")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .add_query_param("year", "2023")
        .add_query_param("month", "12")
        .add_query_param("day", "25")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_search_invalid_date() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    for (year, month, day) in [("2023", "13", "01"), ("2023", "1", "5"), ("2023", "02", "32")] {
        let response = server
            .get("/api/answers")
            .add_header(AUTHORIZATION, format!("Bearer {}", token))
            .add_query_param("year", year)
            .add_query_param("month", month)
            .add_query_param("day", day)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "INVALID_DATE");
    }
}

#[tokio::test]
async fn test_search_day_past_month_end() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    let response = server
        .get("/api/answers")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .add_query_param("year", "2023")
        .add_query_param("month", "02")
        .add_query_param("day", "30")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_answer_missing_question() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    let response = server
        .post("/api/questions/77/answers")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "content": "Hello" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_requires_auth() {
    let (server, _state) = create_test_server().await;

    let response = server
        .get("/api/answers")
        .add_query_param("year", "2023")
        .add_query_param("month", "12")
        .add_query_param("day", "25")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
