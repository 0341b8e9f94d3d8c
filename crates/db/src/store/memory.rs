//! Process-local [`TaskStore`] kept in insertion order.
//!
//! Nothing survives a restart. Used with `TASK_STORE=memory` and by the
//! HTTP integration tests.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tusker_core::task::{NewTask, Task, TaskPatch};
use tusker_core::types::{new_task_id, TaskId};

use crate::error::StoreError;
use crate::store::TaskStore;

#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<IndexMap<TaskId, Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, task: &NewTask) -> Result<Task, StoreError> {
        let created = task.clone().into_task(new_task_id(), Utc::now());
        self.tasks.write().await.insert(created.id, created.clone());
        tracing::debug!(task_id = %created.id, "Inserted task into memory store");
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.read().await.values().rev().cloned().collect())
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.get_mut(&id).map(|task| {
            patch.apply(task, Utc::now());
            task.clone()
        }))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, StoreError> {
        Ok(self.tasks.write().await.shift_remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
