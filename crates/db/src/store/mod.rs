//! The task store abstraction.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use tusker_core::task::{NewTask, Task, TaskPatch};
use tusker_core::types::TaskId;

use crate::error::StoreError;

/// Persistent collection of tasks addressable by id.
///
/// Each operation is atomic for a single record. Lookups on an unknown id
/// report absence through `Option`/`bool` rather than an error so callers
/// can tell "not found" apart from infrastructure failure.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a validated task, assigning its id and timestamps.
    async fn insert(&self, task: &NewTask) -> Result<Task, StoreError>;

    /// All tasks, newest first.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    async fn get(&self, id: TaskId) -> Result<Option<Task>, StoreError>;

    /// Merge `patch` into the task. `None` if the id is unknown.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Option<Task>, StoreError>;

    /// Remove the task permanently. `false` if the id is unknown.
    async fn delete(&self, id: TaskId) -> Result<bool, StoreError>;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
