//! The task resource and its closed enum domains.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{TaskId, Timestamp};

/// Generates a closed, string-valued enum domain.
///
/// Each variant's wire value is used for JSON (de)serialization, for the
/// database column and for `FromStr`/`Display`, so the three never drift.
macro_rules! define_domain_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal, default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// Every member of the domain, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire value of this member.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }

            /// Comma-separated list of accepted wire values.
            pub fn allowed_values() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        $field,
                        Self::allowed_values()
                    ))),
                }
            }
        }
    };
}

define_domain_enum! {
    /// Where a task is in its lifecycle.
    TaskStatus ("status", default = Pending) {
        Pending = "pending",
        InProgress = "in-progress",
        Completed = "completed",
    }
}

define_domain_enum! {
    /// How urgent a task is.
    TaskPriority ("priority", default = Medium) {
        Low = "low",
        Medium = "medium",
        High = "high",
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A validated task ready for insertion. The store assigns `id` and the
/// timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl NewTask {
    /// Materialize the record the store will persist.
    pub fn into_task(self, id: TaskId, now: Timestamp) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A validated partial update. `None` leaves the field unchanged.
///
/// `description` is tri-state: `None` keeps the current value,
/// `Some(None)` clears it and `Some(Some(_))` replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    /// True when the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }

    /// Merge the patch into `task`. `id` and `created_at` are never touched.
    pub fn apply(&self, task: &mut Task, now: Timestamp) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        task.updated_at = now;
    }
}
