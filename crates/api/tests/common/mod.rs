#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tusker_api::config::{CorsOrigins, ServerConfig, StoreBackend};
use tusker_api::router::build_app_router;
use tusker_api::state::AppState;
use tusker_core::task::{NewTask, Task, TaskPatch};
use tusker_core::types::TaskId;
use tusker_db::{MemoryTaskStore, StoreError, TaskStore};

/// How a [`FaultyStore`] misbehaves.
#[derive(Debug, Clone, Copy)]
pub enum Fault {
    /// Every operation fails, as if the database were down.
    Unavailable,
    /// Every operation hangs for the given time before failing.
    Stall(Duration),
    /// Every operation panics.
    Panic,
}

/// A store that never succeeds.
pub struct FaultyStore(pub Fault);

impl FaultyStore {
    async fn fail<T>(&self) -> Result<T, StoreError> {
        match self.0 {
            Fault::Unavailable => {}
            Fault::Stall(duration) => tokio::time::sleep(duration).await,
            Fault::Panic => panic!("task store panicked"),
        }
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl TaskStore for FaultyStore {
    async fn insert(&self, _task: &NewTask) -> Result<Task, StoreError> {
        self.fail().await
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.fail().await
    }

    async fn get(&self, _id: TaskId) -> Result<Option<Task>, StoreError> {
        self.fail().await
    }

    async fn update(&self, _id: TaskId, _patch: &TaskPatch) -> Result<Option<Task>, StoreError> {
        self.fail().await
    }

    async fn delete(&self, _id: TaskId) -> Result<bool, StoreError> {
        self.fail().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fail().await
    }

    fn backend(&self) -> &'static str {
        "faulty"
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec!["http://localhost:3000".parse().unwrap()]),
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as production so integration tests
/// exercise the real middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery).
pub fn build_app_with_store(store: Arc<dyn TaskStore>) -> Router {
    build_app_with_config(store, &test_config())
}

/// Like [`build_app_with_store`] with an explicit configuration.
pub fn build_app_with_config(store: Arc<dyn TaskStore>, config: &ServerConfig) -> Router {
    build_app_router(AppState { store }, config)
}

/// Router over a fresh, empty in-memory store. Clone it to send several
/// requests against the same data.
pub fn build_test_app() -> Router {
    build_app_with_store(Arc::new(MemoryTaskStore::new()))
}

/// Router whose store fails every operation.
pub fn build_failing_app() -> Router {
    build_app_with_store(Arc::new(FaultyStore(Fault::Unavailable)))
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a task and return its JSON representation.
pub async fn create_task(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(app.clone(), "/api/tasks", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
