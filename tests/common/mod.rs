//! Test helpers for Web API integration tests.

#![allow(dead_code)]

use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use iaiq::web::handlers::AppState;
use iaiq::web::router::create_router;
use iaiq::{Database, TokenProvider};
use serde_json::{json, Value};
use std::sync::Arc;

/// JWT secret used by every test server.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-0123";

/// Default password for test members.
pub const TEST_PASSWORD: &str = "password123";

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Arc<AppState>) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let tokens = TokenProvider::new(TEST_SECRET).expect("Failed to create token provider");

    let app_state = Arc::new(AppState::new(db, tokens));
    let router = create_router(app_state.clone(), &[]);

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, app_state)
}

/// Sign up a member and return the response body.
pub async fn signup(server: &TestServer, email: &str, nickname: &str) -> Value {
    server
        .post("/api/auth/signup")
        .json(&json!({
            "email": email,
            "password": TEST_PASSWORD,
            "nickname": nickname
        }))
        .await
        .json::<Value>()
}

/// Log in and return the access token.
pub async fn login(server: &TestServer, email: &str) -> String {
    let body = server
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": TEST_PASSWORD
        }))
        .await
        .json::<Value>();

    body["data"]["access_token"]
        .as_str()
        .expect("login response has no access token")
        .to_string()
}

/// Sign up then log in, returning the access token.
pub async fn signup_and_login(server: &TestServer, email: &str, nickname: &str) -> String {
    signup(server, email, nickname).await;
    login(server, email).await
}

/// Create a category as the given member.
pub async fn create_category(server: &TestServer, token: &str, topic: &str) {
    server
        .post("/api/categories")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "topic": topic }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

/// Write a board and return its ID.
pub async fn write_board(server: &TestServer, token: &str, topic: &str, title: &str) -> i64 {
    let response = server
        .post("/api/boards")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({
            "topic": topic,
            "title": title,
            "content": "Board body"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["data"]["board_id"]
        .as_i64()
        .expect("write response has no board_id")
}
