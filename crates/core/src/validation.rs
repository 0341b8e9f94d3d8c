//! Request DTOs for the task API and the rules that turn them into
//! [`NewTask`] / [`TaskPatch`] values.
//!
//! Enum fields arrive as raw strings so that an unrecognized value produces
//! a validation error naming the allowed values, rather than an opaque
//! deserialization failure.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::task::{NewTask, TaskPatch, TaskPriority, TaskStatus};

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Body of `PATCH /api/tasks/{id}`. Every field is optional.
///
/// `description` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`), which clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Maps a present field (including `null`) to `Some(..)`. Combined with
/// `#[serde(default)]`, an absent field stays `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl CreateTaskRequest {
    /// Validate the request, applying defaults for omitted enum fields.
    pub fn validate(&self) -> Result<NewTask, CoreError> {
        let title = validate_title(self.title.as_deref())?;
        let status = parse_or_default::<TaskStatus>(self.status.as_deref())?;
        let priority = parse_or_default::<TaskPriority>(self.priority.as_deref())?;

        Ok(NewTask {
            title,
            description: normalize_description(self.description.as_deref())?,
            status,
            priority,
        })
    }
}

impl UpdateTaskRequest {
    /// Validate every supplied field with the same rules as creation.
    pub fn validate(&self) -> Result<TaskPatch, CoreError> {
        let title = match self.title.as_deref() {
            Some(raw) => Some(validate_title(Some(raw))?),
            None => None,
        };
        let status = self
            .status
            .as_deref()
            .map(str::parse::<TaskStatus>)
            .transpose()?;
        let priority = self
            .priority
            .as_deref()
            .map(str::parse::<TaskPriority>)
            .transpose()?;
        let description = self
            .description
            .as_ref()
            .map(|d| normalize_description(d.as_deref()))
            .transpose()?;

        Ok(TaskPatch {
            title,
            description,
            status,
            priority,
        })
    }
}

/// A title must be present and non-empty after trimming. Returns the
/// trimmed title.
pub fn validate_title(title: Option<&str>) -> Result<String, CoreError> {
    match title.map(str::trim) {
        Some(t) if !t.is_empty() => {
            reject_nul("Title", t)?;
            Ok(t.to_string())
        }
        _ => Err(CoreError::Validation("Title is required".to_string())),
    }
}

/// Empty and whitespace-only descriptions are stored as absent.
pub fn normalize_description(description: Option<&str>) -> Result<Option<String>, CoreError> {
    match description.filter(|d| !d.trim().is_empty()) {
        Some(d) => {
            reject_nul("Description", d)?;
            Ok(Some(d.to_string()))
        }
        None => Ok(None),
    }
}

/// PostgreSQL text columns cannot hold NUL.
fn reject_nul(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

fn parse_or_default<T>(raw: Option<&str>) -> Result<T, CoreError>
where
    T: std::str::FromStr<Err = CoreError> + Default,
{
    raw.map(|s| s.parse::<T>())
        .transpose()
        .map(Option::unwrap_or_default)
}
