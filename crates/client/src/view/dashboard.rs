//! The task list view with its create dialog.

use tusker_core::task::Task;
use tusker_core::types::parse_task_id;

use crate::form::TaskForm;
use crate::notify::Notifier;
use crate::service::TaskService;
use crate::view::ViewPhase;

#[derive(Debug, Default)]
pub struct DashboardView {
    phase: ViewPhase,
    tasks: Vec<Task>,
    form: TaskForm,
    form_open: bool,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Close the create dialog and reset its draft.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.form = TaskForm::default();
    }

    /// Fetch the task list. Issued when the view is mounted.
    pub async fn load(&mut self, service: &dyn TaskService, notifier: &mut Notifier) {
        self.phase = ViewPhase::Loading;
        match service.list_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch tasks");
                notifier.error("Failed to fetch tasks");
                self.phase = ViewPhase::Error;
            }
        }
    }

    /// Submit the create dialog.
    ///
    /// On success the new task is prepended to the local list and the
    /// dialog closes. On failure the dialog stays open with its draft.
    pub async fn submit(
        &mut self,
        service: &dyn TaskService,
        notifier: &mut Notifier,
    ) -> Option<Task> {
        if let Err(err) = self.form.validate() {
            notifier.error(err.to_string());
            return None;
        }

        let previous = self.phase;
        self.phase = ViewPhase::Submitting;
        match service.create_task(&self.form.to_create_request()).await {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "Task created");
                self.tasks.insert(0, task.clone());
                self.close_form();
                notifier.success("Task created successfully");
                self.phase = ViewPhase::Ready;
                Some(task)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to create task");
                notifier.error("Failed to create task");
                self.phase = if previous == ViewPhase::Ready {
                    ViewPhase::Error
                } else {
                    previous
                };
                None
            }
        }
    }

    /// Delete a task and drop it from the local list on success.
    pub async fn delete(
        &mut self,
        service: &dyn TaskService,
        notifier: &mut Notifier,
        id: &str,
    ) -> bool {
        let previous = self.phase;
        self.phase = ViewPhase::Submitting;
        match service.delete_task(id).await {
            Ok(()) => {
                tracing::info!(task_id = %id, "Task deleted");
                if let Some(task_id) = parse_task_id(id) {
                    self.tasks.retain(|t| t.id != task_id);
                }
                notifier.success("Task deleted successfully");
                self.phase = ViewPhase::Ready;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, task_id = %id, "Failed to delete task");
                notifier.error("Failed to delete task");
                self.phase = if previous == ViewPhase::Ready {
                    ViewPhase::Error
                } else {
                    previous
                };
                false
            }
        }
    }
}
