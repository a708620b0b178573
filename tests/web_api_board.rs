//! Web API Board Tests
//!
//! Integration tests for category and board endpoints.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::{create_category, create_test_server, signup_and_login, write_board};
use serde_json::{json, Value};

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_categories() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    create_category(&server, &token, "study").await;
    create_category(&server, &token, "career").await;

    let response = server.get("/api/categories").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let topics: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["topic"].as_str().unwrap())
        .collect();
    assert_eq!(topics, vec!["career", "study"]);
}

#[tokio::test]
async fn test_create_category_requires_auth() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/api/categories")
        .json(&json!({ "topic": "general" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_duplicate_category() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;
    create_category(&server, &token, "general").await;

    let response = server
        .post("/api/categories")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "topic": "general" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

// ============================================================================
// Board Write/Read Tests
// ============================================================================

#[tokio::test]
async fn test_write_and_get_board() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;
    create_category(&server, &token, "general").await;

    let board_id = write_board(&server, &token, "general", "Hello").await;

    let response = server.get(&format!("/api/boards/{}", board_id)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["id"], board_id);
    assert_eq!(body["data"]["title"], "Hello");
    assert_eq!(body["data"]["topic"], "general");
    assert_eq!(body["data"]["author"]["nickname"], "Alice");
}

#[tokio::test]
async fn test_write_board_unknown_category() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    let response = server
        .post("/api/boards")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({
            "topic": "missing",
            "title": "Hello",
            "content": "Body"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CATEGORY_NOT_FOUND");
}

#[tokio::test]
async fn test_write_board_requires_auth() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/api/boards")
        .json(&json!({
            "topic": "general",
            "title": "Hello",
            "content": "Body"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_write_board_empty_title() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;
    create_category(&server, &token, "general").await;

    let response = server
        .post("/api/boards")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({
            "topic": "general",
            "title": "   ",
            "content": "Body"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_board_not_found() {
    let (server, _state) = create_test_server().await;

    let response = server.get("/api/boards/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BOARD_NOT_FOUND");
}

#[tokio::test]
async fn test_list_boards_by_topic() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;
    create_category(&server, &token, "general").await;
    create_category(&server, &token, "study").await;

    for i in 1..=3 {
        write_board(&server, &token, "general", &format!("Post {}", i)).await;
    }
    write_board(&server, &token, "study", "Elsewhere").await;

    let response = server
        .get("/api/categories/general/boards")
        .add_query_param("per_page", 2)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Post 3");
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["has_more"], true);

    let response = server.get("/api/categories/missing/boards").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Board Edit/Delete Tests
// ============================================================================

#[tokio::test]
async fn test_edit_board_by_owner() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;
    create_category(&server, &token, "general").await;
    create_category(&server, &token, "study").await;
    let board_id = write_board(&server, &token, "general", "Original").await;

    let response = server
        .patch(&format!("/api/boards/{}", board_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({
            "topic": "study",
            "title": "Edited",
            "content": "New body"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], board_id);
    assert_eq!(body["data"]["title"], "Edited");
    assert_eq!(body["data"]["content"], "New body");
    assert_eq!(body["data"]["topic"], "study");
    assert_eq!(body["data"]["author"]["nickname"], "Alice");
}

#[tokio::test]
async fn test_edit_board_by_non_owner() {
    let (server, _state) = create_test_server().await;
    let alice = signup_and_login(&server, "alice@example.com", "Alice").await;
    let bob = signup_and_login(&server, "bob@example.com", "Bob").await;
    create_category(&server, &alice, "general").await;
    let board_id = write_board(&server, &alice, "general", "Original").await;

    let response = server
        .patch(&format!("/api/boards/{}", board_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", bob))
        .json(&json!({
            "topic": "general",
            "title": "Hijacked",
            "content": "Body"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_BOARD_AUTHOR");

    let body: Value = server
        .get(&format!("/api/boards/{}", board_id))
        .await
        .json();
    assert_eq!(body["data"]["title"], "Original");
}

#[tokio::test]
async fn test_edit_board_unknown_category() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;
    create_category(&server, &token, "general").await;
    let board_id = write_board(&server, &token, "general", "Original").await;

    let response = server
        .patch(&format!("/api/boards/{}", board_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({
            "topic": "missing",
            "title": "Edited",
            "content": "Body"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CATEGORY_NOT_FOUND");

    let body: Value = server
        .get(&format!("/api/boards/{}", board_id))
        .await
        .json();
    assert_eq!(body["data"]["title"], "Original");
}

#[tokio::test]
async fn test_delete_board_by_owner() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;
    create_category(&server, &token, "general").await;
    let board_id = write_board(&server, &token, "general", "Doomed").await;

    let response = server
        .delete(&format!("/api/boards/{}", board_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["board_id"], board_id);

    let response = server.get(&format!("/api/boards/{}", board_id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_board_by_non_owner() {
    let (server, _state) = create_test_server().await;
    let alice = signup_and_login(&server, "alice@example.com", "Alice").await;
    let bob = signup_and_login(&server, "bob@example.com", "Bob").await;
    create_category(&server, &alice, "general").await;
    let board_id = write_board(&server, &alice, "general", "Mine").await;

    let response = server
        .delete(&format!("/api/boards/{}", board_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", bob))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    server
        .get(&format!("/api/boards/{}", board_id))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_delete_missing_board() {
    let (server, _state) = create_test_server().await;
    let token = signup_and_login(&server, "alice@example.com", "Alice").await;

    let response = server
        .delete("/api/boards/42")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BOARD_NOT_FOUND");
}
