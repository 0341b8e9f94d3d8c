/// Errors from the task client.
///
/// Views treat every variant the same way ("the operation failed"); the
/// distinction exists for logging and for callers that need it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body, or the raw body.
        message: String,
    },

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    /// True when the API reported the task as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
