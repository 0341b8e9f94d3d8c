//! In-process [`TaskService`] for view tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tusker_core::error::CoreError;
use tusker_core::task::Task;
use tusker_core::types::{new_task_id, parse_task_id};
use tusker_core::validation::{CreateTaskRequest, UpdateTaskRequest};

use crate::error::ClientError;
use crate::service::TaskService;

/// Keeps tasks newest first, like the real API. When `failing` is set,
/// every call returns a 500.
#[derive(Default)]
pub struct FakeService {
    tasks: Mutex<Vec<Task>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(titles: &[&str]) -> Self {
        let svc = Self::new();
        for title in titles {
            let task = CreateTaskRequest {
                title: Some(title.to_string()),
                ..Default::default()
            }
            .validate()
            .unwrap()
            .into_task(new_task_id(), chrono::Utc::now());
            svc.tasks.lock().unwrap().insert(0, task);
        }
        svc
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn begin(&self) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Api {
                status: 500,
                message: "An internal error occurred".into(),
            });
        }
        Ok(())
    }
}

fn api_error(err: CoreError) -> ClientError {
    match err {
        CoreError::NotFound { .. } => ClientError::Api {
            status: 404,
            message: err.to_string(),
        },
        other => ClientError::Api {
            status: 400,
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl TaskService for FakeService {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.begin()?;
        Ok(self.snapshot())
    }

    async fn create_task(&self, input: &CreateTaskRequest) -> Result<Task, ClientError> {
        self.begin()?;
        let task = input
            .validate()
            .map_err(api_error)?
            .into_task(new_task_id(), chrono::Utc::now());
        self.tasks.lock().unwrap().insert(0, task.clone());
        Ok(task)
    }

    async fn get_task(&self, id: &str) -> Result<Task, ClientError> {
        self.begin()?;
        let id = parse_task_id(id).ok_or_else(|| api_error(CoreError::task_not_found(id)))?;
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| api_error(CoreError::task_not_found(id)))
    }

    async fn update_task(&self, id: &str, input: &UpdateTaskRequest) -> Result<Task, ClientError> {
        self.begin()?;
        let patch = input.validate().map_err(api_error)?;
        let id = parse_task_id(id).ok_or_else(|| api_error(CoreError::task_not_found(id)))?;
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| api_error(CoreError::task_not_found(id)))?;
        patch.apply(task, chrono::Utc::now());
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        self.begin()?;
        let id = parse_task_id(id).ok_or_else(|| api_error(CoreError::task_not_found(id)))?;
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(api_error(CoreError::task_not_found(id)));
        }
        Ok(())
    }
}
