use std::sync::Arc;

use tusker_db::TaskStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Task persistence, constructed once at startup.
    pub store: Arc<dyn TaskStore>,
}
