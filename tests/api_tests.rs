// tests/api_tests.rs

use quiz_backend::{config::Config, routes, state::AppState};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
///
/// Each test gets its own in-memory SQLite database; max_connections(1)
/// keeps every query on the single connection that holds it.
async fn spawn_app() -> String {
    let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid sqlite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .expect("Failed to open in-memory SQLite for testing");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        rust_log: "error".to_string(),
    };

    let state = AppState { pool, config };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn create_with_empty_body_fails() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: empty object is rejected before any shape checks
    let response = client
        .post(&format!("{}/api/quizzes", address))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Missing fields");

    // And no record was created
    let list: Vec<serde_json::Value> = client
        .get(&format!("{}/api/quizzes", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn create_fails_validation_on_empty_title() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(&format!("{}/api/quizzes", address))
        .json(&serde_json::json!({
            "title": "",
            "questions": []
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn create_fails_on_unknown_question_type() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: 'radio' is not in the closed type set
    let response = client
        .post(&format!("{}/api/quizzes", address))
        .json(&serde_json::json!({
            "title": "Bad quiz",
            "questions": [
                { "type": "radio", "questionText": "Pick one" }
            ]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_store_access() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/api/quizzes/abc", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid id: must be a positive number");
}

#[tokio::test]
async fn zero_and_negative_ids_are_rejected() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for bad_id in ["0", "-5"] {
        // Act
        let get_resp = client
            .get(&format!("{}/api/quizzes/{}", address, bad_id))
            .send()
            .await
            .expect("Failed to execute request");
        let delete_resp = client
            .delete(&format!("{}/api/quizzes/{}", address, bad_id))
            .send()
            .await
            .expect("Failed to execute request");

        // Assert
        assert_eq!(get_resp.status().as_u16(), 400, "GET id={}", bad_id);
        assert_eq!(delete_resp.status().as_u16(), 400, "DELETE id={}", bad_id);
    }
}

#[tokio::test]
async fn get_missing_quiz_returns_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/api/quizzes/9999", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Quiz not found");
}

#[tokio::test]
async fn delete_missing_quiz_returns_404_without_mutating_store() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Seed one quiz so there is something that must survive
    client
        .post(&format!("{}/api/quizzes", address))
        .json(&serde_json::json!({ "title": "Survivor", "questions": [] }))
        .send()
        .await
        .expect("Seed create failed");

    // Act
    let response = client
        .delete(&format!("{}/api/quizzes/9999", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);

    let list: Vec<serde_json::Value> = client
        .get(&format!("{}/api/quizzes", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
}
