/// Task identifiers are time-ordered UUIDs assigned by the store.
pub type TaskId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh task identifier.
pub fn new_task_id() -> TaskId {
    uuid::Uuid::now_v7()
}

/// Parse a path segment into a [`TaskId`].
///
/// Returns `None` for anything that is not a well-formed UUID. Such a value
/// can never have been issued by the store.
pub fn parse_task_id(raw: &str) -> Option<TaskId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
