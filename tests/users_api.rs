//! End-to-end tests over a real socket.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_seed_scenario() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/api/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let users: Value = res.json().await.unwrap();
    assert_eq!(
        users,
        json!([
            {"id": 1, "name": "John Doe", "email": "john@example.com"},
            {"id": 2, "name": "Jane Smith", "email": "jane@example.com"}
        ])
    );

    let res = client
        .post(server.url("/api/users"))
        .json(&json!({"name": "Test User", "email": "test@example.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created, json!({"id": 3, "name": "Test User", "email": "test@example.com"}));

    let res = client.get(server.url("/api/users/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["id"], 1);

    let res = client
        .put(server.url("/api/users/1"))
        .json(&json!({"name": "X"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated, json!({"id": 1, "name": "X", "email": "john@example.com"}));

    let res = client.delete(server.url("/api/users/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let res = client.get(server.url("/api/users/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(server.url("/api/users/999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "User not found"}));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_info_and_health() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let info: Value = res.json().await.unwrap();
    assert!(info.get("message").is_some());
    assert!(info.get("version").is_some());
    assert_eq!(info["status"], "running");

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let health: Value = res.json().await.unwrap();
    assert_eq!(health["status"], "healthy");
    assert!(health["timestamp"].is_string());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_create_requires_name_and_email() {
    let server = common::start_server().await;
    let client = common::client();

    for body in [
        json!({"name": "Only Name"}),
        json!({"email": "only@example.com"}),
        json!({}),
        json!({"name": "", "email": "empty@example.com"}),
    ] {
        let res = client.post(server.url("/api/users")).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let err: Value = res.json().await.unwrap();
        assert_eq!(err, json!({"error": "Name and email are required"}));
    }

    let users: Vec<Value> = client
        .get(server.url("/api/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.len(), 2);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_body_reports_generic_error() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/api/users"))
        .header("content-type", "application/json")
        .body("{oops")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong!");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server().await;
    let client = common::client();
    let health_url = server.url("/health");

    let res = client.get(&health_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server should stop after shutdown is triggered")
        .unwrap();
    assert!(result.is_ok());

    assert!(client.get(&health_url).send().await.is_err());
}
