//! Integration tests for the middleware stack: CORS, timeout and panic recovery.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{
    build_app_with_config, build_app_with_store, build_test_app, get, send, test_config, Fault,
    FaultyStore,
};
use tusker_api::config::CorsOrigins;
use tusker_db::MemoryTaskStore;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/tasks")
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap()
}

fn app_with_any_origin() -> Router {
    let mut config = test_config();
    config.cors_origins = CorsOrigins::Any;
    build_app_with_config(Arc::new(MemoryTaskStore::new()), &config)
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wildcard_origin_allows_any_origin_without_credentials() {
    let response = send(app_with_any_origin(), preflight("https://tasks.example.org")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert!(headers.get("access-control-allow-credentials").is_none());
}

#[tokio::test]
async fn wildcard_origin_applies_to_simple_requests() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/tasks")
        .header("Origin", "http://localhost:8080")
        .body(Body::empty())
        .unwrap();

    let response = send(app_with_any_origin(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn origin_list_allows_credentials() {
    let response = send(build_test_app(), preflight("http://localhost:3000")).await;

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(headers.get("access-control-allow-credentials").unwrap(), "true");
}

#[tokio::test]
async fn origin_list_rejects_unlisted_origin() {
    let response = send(build_test_app(), preflight("https://evil.example.com")).await;

    assert!(response.headers().get("access-control-allow-origin").is_none());
}

// ---------------------------------------------------------------------------
// Timeout and panic recovery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_store_times_out_with_408() {
    let mut config = test_config();
    config.request_timeout_secs = 1;
    let store = Arc::new(FaultyStore(Fault::Stall(Duration::from_secs(10))));
    let app = build_app_with_config(store, &config);

    let response = get(app, "/api/tasks").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn panicking_handler_returns_500() {
    let app = build_app_with_store(Arc::new(FaultyStore(Fault::Panic)));

    let response = get(app, "/api/tasks").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
