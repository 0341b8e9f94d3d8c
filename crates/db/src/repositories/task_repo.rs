//! Repository for the `tasks` table.

use sqlx::PgPool;
use tusker_core::task::{NewTask, Task, TaskPatch};
use tusker_core::types::{new_task_id, TaskId};

use crate::error::StoreError;
use crate::models::task::TaskRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status, priority, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTask) -> Result<Task, StoreError> {
        let query = format!(
            "INSERT INTO tasks (id, title, description, status, priority)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(new_task_id())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.as_str())
            .bind(input.priority.as_str())
            .fetch_one(pool)
            .await?;
        Task::try_from(row)
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: TaskId) -> Result<Option<Task>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    /// List all tasks ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, TaskRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Task::try_from)
            .collect()
    }

    /// Update a task. Only fields set in `patch` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: TaskId,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, StoreError> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status = COALESCE($5, status),
                priority = COALESCE($6, priority),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let (set_description, description) = match &patch.description {
            Some(value) => (true, value.clone()),
            None => (false, None),
        };
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(set_description)
            .bind(description)
            .bind(patch.status.map(|s| s.as_str()))
            .bind(patch.priority.map(|p| p.as_str()))
            .fetch_optional(pool)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    /// Permanently delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: TaskId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
