//! Task row model.

use sqlx::FromRow;
use tusker_core::task::{Task, TaskPriority, TaskStatus};
use tusker_core::types::{TaskId, Timestamp};

use crate::error::StoreError;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<TaskRow> for Task {
    type Error = StoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| StoreError::Corrupt {
            id: row.id.to_string(),
            reason,
        };
        let status = row
            .status
            .parse::<TaskStatus>()
            .map_err(|e| corrupt(format!("{e}")))?;
        let priority = row
            .priority
            .parse::<TaskPriority>()
            .map_err(|e| corrupt(format!("{e}")))?;

        Ok(Task {
            id: row.id,
            title: row.title,
            description: row.description,
            status,
            priority,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;
    use tusker_core::types::new_task_id;

    use super::*;

    fn row(status: &str, priority: &str) -> TaskRow {
        let now = Utc::now();
        TaskRow {
            id: new_task_id(),
            title: "Row".into(),
            description: None,
            status: status.into(),
            priority: priority.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn valid_row_converts() {
        let task = Task::try_from(row("in-progress", "low")).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::Low);
    }

    #[test]
    fn unknown_enum_in_row_is_corrupt() {
        assert_matches!(
            Task::try_from(row("archived", "low")),
            Err(StoreError::Corrupt { .. })
        );
        assert_matches!(
            Task::try_from(row("pending", "urgent")),
            Err(StoreError::Corrupt { .. })
        );
    }
}
