//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tusker_core::error::CoreError;
use tusker_core::task::Task;
use tusker_core::types::{parse_task_id, TaskId};
use tusker_core::validation::{CreateTaskRequest, UpdateTaskRequest};

use crate::error::{AppError, AppResult};
use crate::middleware::json::ApiJson;
use crate::state::AppState;

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.store.list().await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let new_task = input.validate()?;
    let task = state.store.insert(&new_task).await?;
    tracing::info!(task_id = %task.id, status = %task.status, priority = %task.priority, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let task_id = parse_id(&id)?;
    let task = state
        .store
        .get(task_id)
        .await?
        .ok_or_else(|| CoreError::task_not_found(task_id))?;
    Ok(Json(task))
}

/// PATCH /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateTaskRequest>,
) -> AppResult<Json<Task>> {
    let task_id = parse_id(&id)?;
    let patch = input.validate()?;
    // An empty patch leaves the row, including `updatedAt`, untouched.
    let updated = if patch.is_empty() {
        state.store.get(task_id).await?
    } else {
        state.store.update(task_id, &patch).await?
    };
    let task = updated.ok_or_else(|| CoreError::task_not_found(task_id))?;
    tracing::info!(task_id = %task.id, "Task updated");
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let task_id = parse_id(&id)?;
    if state.store.delete(task_id).await? {
        tracing::info!(%task_id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::task_not_found(task_id).into())
    }
}

/// A path id that does not parse was never issued, so it is reported as
/// not found rather than as a bad request.
fn parse_id(raw: &str) -> Result<TaskId, AppError> {
    parse_task_id(raw).ok_or_else(|| AppError::Core(CoreError::task_not_found(raw)))
}
