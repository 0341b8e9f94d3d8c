//! PostgreSQL-backed [`TaskStore`].

use async_trait::async_trait;
use tusker_core::task::{NewTask, Task, TaskPatch};
use tusker_core::types::TaskId;

use crate::error::StoreError;
use crate::repositories::TaskRepo;
use crate::store::TaskStore;
use crate::DbPool;

/// Task store delegating to [`TaskRepo`] over a shared connection pool.
#[derive(Clone)]
pub struct PgTaskStore {
    pool: DbPool,
}

impl PgTaskStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn insert(&self, task: &NewTask) -> Result<Task, StoreError> {
        TaskRepo::create(&self.pool, task).await
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        TaskRepo::list(&self.pool).await
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        TaskRepo::find_by_id(&self.pool, id).await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Option<Task>, StoreError> {
        TaskRepo::update(&self.pool, id, patch).await
    }

    async fn delete(&self, id: TaskId) -> Result<bool, StoreError> {
        TaskRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
