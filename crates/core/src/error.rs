#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a missing task.
    pub fn task_not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            entity: "Task",
            id: id.to_string(),
        }
    }
}
