//! Access to the task API.
//!
//! Views talk to a [`TaskService`] so they can be exercised without a
//! server; [`HttpTaskService`] is the real implementation over HTTP.

use async_trait::async_trait;
use serde::Deserialize;
use tusker_core::task::Task;
use tusker_core::validation::{CreateTaskRequest, UpdateTaskRequest};

use crate::error::ClientError;

/// The five task operations, one network round trip each.
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;

    async fn create_task(&self, input: &CreateTaskRequest) -> Result<Task, ClientError>;

    async fn get_task(&self, id: &str) -> Result<Task, ClientError>;

    async fn update_task(&self, id: &str, input: &UpdateTaskRequest) -> Result<Task, ClientError>;

    async fn delete_task(&self, id: &str) -> Result<(), ClientError>;
}

/// Error body produced by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the `/api/tasks` resource.
#[derive(Debug, Clone)]
pub struct HttpTaskService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskService {
    /// Create a client for the given collection URL,
    /// e.g. `http://localhost:5000/api/tasks`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, converting failures
    /// into [`ClientError::Api`] with the API's message when available.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        tracing::debug!(status = status.as_u16(), %message, "Task API returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(&self.base_url).send().await?;
        Self::parse_response(response).await
    }

    async fn create_task(&self, input: &CreateTaskRequest) -> Result<Task, ClientError> {
        let response = self.client.post(&self.base_url).json(input).send().await?;
        Self::parse_response(response).await
    }

    async fn get_task(&self, id: &str) -> Result<Task, ClientError> {
        let response = self.client.get(self.task_url(id)).send().await?;
        Self::parse_response(response).await
    }

    async fn update_task(&self, id: &str, input: &UpdateTaskRequest) -> Result<Task, ClientError> {
        let response = self
            .client
            .patch(self.task_url(id))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
