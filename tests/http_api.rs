//! End-to-End HTTP API Tests
//!
//! Drives the full router through tower's `oneshot` without binding a
//! socket. Covers the create/read/remove lifecycle, the 400 input-validation
//! paths, and the 500 not-found behavior of the reference deployment.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bannerd::http_server::HttpServer;

// =============================================================================
// Test Utilities
// =============================================================================

fn app() -> Router {
    HttpServer::new().router()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, "GET", uri).await
}

async fn post(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, "POST", uri).await
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn as_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_save_get_remove_lifecycle() {
    let app = app();

    let (status, body) = post(
        &app,
        "/banners.save?id=0&title=Sale&content=50%25&button=Buy&link=http://x",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let expected = json!({
        "ID": 1,
        "Title": "Sale",
        "Content": "50%",
        "Button": "Buy",
        "Link": "http://x"
    });
    assert_eq!(as_json(&body), expected);

    let (status, body) = get(&app, "/banners.getById?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), expected);

    let (status, body) = get(&app, "/banners.removeById?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), expected);

    let (status, _) = get(&app, "/banners.getById?id=1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_all_reflects_saves() {
    let app = app();

    let (_, body) = get(&app, "/banners.getAll").await;
    assert_eq!(as_json(&body), json!([]));

    post(&app, "/banners.save?id=0&title=First").await;
    post(&app, "/banners.save?id=0&title=Second").await;

    let (status, body) = get(&app, "/banners.getAll").await;
    assert_eq!(status, StatusCode::OK);

    let list = as_json(&body);
    let titles: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["Title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_update_via_save_keeps_id() {
    let app = app();

    post(&app, "/banners.save?id=0&title=Old").await;
    let (status, body) = post(&app, "/banners.save?id=1&title=New&button=Go").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({"ID": 1, "Title": "New", "Content": "", "Button": "Go", "Link": ""})
    );

    let (_, body) = get(&app, "/banners.getAll").await;
    assert_eq!(as_json(&body).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_endpoints_accept_get_and_post() {
    let app = app();

    let (status, _) = get(&app, "/banners.save?id=0&title=ViaGet").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post(&app, "/banners.getById?id=1").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post(&app, "/banners.removeById?id=1").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Input Validation (400)
// =============================================================================

#[tokio::test]
async fn test_missing_id_is_bad_request() {
    let app = app();
    for uri in [
        "/banners.getById",
        "/banners.removeById",
        "/banners.save?title=NoId",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = app();
    for uri in [
        "/banners.getById?id=abc",
        "/banners.removeById?id=1.5",
        "/banners.save?id=abc&title=Bad",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_save_with_all_fields_empty_is_bad_request() {
    let app = app();
    let (status, _) = post(&app, "/banners.save?id=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A single populated field is enough to pass the presence check
    let (status, _) = post(&app, "/banners.save?id=0&button=Buy").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Not Found (reference behavior: 500, reason-phrase body)
// =============================================================================

#[tokio::test]
async fn test_unknown_id_maps_to_internal_server_error() {
    let app = app();
    for uri in [
        "/banners.getById?id=9",
        "/banners.removeById?id=9",
        "/banners.save?id=9&title=Ghost",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "uri: {}", uri);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "Internal Server Error",
            "error body is the bare reason phrase"
        );
    }
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health = as_json(&body);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}
