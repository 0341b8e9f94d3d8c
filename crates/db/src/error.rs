/// Errors surfaced by a [`TaskStore`](crate::TaskStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database failed or is unreachable.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A persisted record could not be mapped back into a task.
    #[error("Corrupt task record {id}: {reason}")]
    Corrupt { id: String, reason: String },
}
