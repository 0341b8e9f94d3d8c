//! Form drafts for creating and editing tasks.

use tusker_core::error::CoreError;
use tusker_core::task::{Task, TaskPriority, TaskStatus};
use tusker_core::validation::{validate_title, CreateTaskRequest, UpdateTaskRequest};

use crate::error::ClientError;

/// Editable snapshot of a task's user-facing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl TaskForm {
    /// Pre-populate from a fetched task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
        }
    }

    /// Client-side check run before any request is sent.
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_title(Some(&self.title))
            .map(|_| ())
            .map_err(|err| match err {
                CoreError::Validation(msg) => ClientError::Validation(msg),
                other => ClientError::Validation(other.to_string()),
            })
    }

    pub fn to_create_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            status: Some(self.status.to_string()),
            priority: Some(self.priority.to_string()),
        }
    }

    /// The full form snapshot as a partial update.
    pub fn to_update_request(&self) -> UpdateTaskRequest {
        UpdateTaskRequest {
            title: Some(self.title.clone()),
            description: Some(Some(self.description.clone())),
            status: Some(self.status.to_string()),
            priority: Some(self.priority.to_string()),
        }
    }
}
