//! The single-task view with its edit form.

use tusker_core::task::Task;

use crate::form::TaskForm;
use crate::notify::Notifier;
use crate::route::Route;
use crate::service::TaskService;
use crate::view::ViewPhase;

#[derive(Debug)]
pub struct DetailView {
    id: String,
    phase: ViewPhase,
    task: Option<Task>,
    form: TaskForm,
}

impl DetailView {
    /// A view for the task at `/tasks/{id}`. Nothing is fetched until
    /// [`load`](Self::load).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phase: ViewPhase::Idle,
            task: None,
            form: TaskForm::default(),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Fetch the task and pre-populate the form.
    ///
    /// Any failure, "not found" included, is reported and answered with a
    /// redirect to the dashboard.
    pub async fn load(
        &mut self,
        service: &dyn TaskService,
        notifier: &mut Notifier,
    ) -> Option<Route> {
        self.phase = ViewPhase::Loading;
        match service.get_task(&self.id).await {
            Ok(task) => {
                self.form = TaskForm::from_task(&task);
                self.task = Some(task);
                self.phase = ViewPhase::Ready;
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, task_id = %self.id, "Failed to fetch task");
                notifier.error("Failed to fetch task details");
                self.phase = ViewPhase::Error;
                Some(Route::Dashboard)
            }
        }
    }

    /// Send the whole form as a partial update.
    ///
    /// On success the local task is replaced by the server's copy; on
    /// failure it is left as it was.
    pub async fn submit(&mut self, service: &dyn TaskService, notifier: &mut Notifier) -> bool {
        if let Err(err) = self.form.validate() {
            notifier.error(err.to_string());
            return false;
        }

        self.phase = ViewPhase::Submitting;
        match service
            .update_task(&self.id, &self.form.to_update_request())
            .await
        {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "Task updated");
                self.task = Some(task);
                notifier.success("Task updated successfully");
                self.phase = ViewPhase::Ready;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, task_id = %self.id, "Failed to update task");
                notifier.error("Failed to update task");
                self.phase = ViewPhase::Error;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tusker_core::task::TaskStatus;

    use super::*;
    use crate::fake::FakeService;

    #[tokio::test]
    async fn load_prefills_form() {
        let svc = FakeService::with_tasks(&["Write report"]);
        let id = svc.snapshot()[0].id.to_string();
        let mut notifier = Notifier::new();
        let mut view = DetailView::new(&id);

        assert_eq!(view.load(&svc, &mut notifier).await, None);

        assert_eq!(view.phase(), ViewPhase::Ready);
        assert_eq!(view.form().title, "Write report");
        assert_eq!(view.form().description, "");
        assert_eq!(view.task().unwrap().id.to_string(), id);
    }

    #[tokio::test]
    async fn load_unknown_id_redirects_home() {
        let svc = FakeService::new();
        let mut notifier = Notifier::new();
        let mut view = DetailView::new("does-not-exist");

        assert_eq!(view.load(&svc, &mut notifier).await, Some(Route::Dashboard));
        assert_eq!(view.phase(), ViewPhase::Error);
        assert_eq!(
            notifier.latest().unwrap().message,
            "Failed to fetch task details"
        );
    }

    #[tokio::test]
    async fn submit_replaces_local_task() {
        let svc = FakeService::with_tasks(&["Write report"]);
        let id = svc.snapshot()[0].id.to_string();
        let mut notifier = Notifier::new();
        let mut view = DetailView::new(id);
        view.load(&svc, &mut notifier).await;

        view.form_mut().status = TaskStatus::Completed;
        assert!(view.submit(&svc, &mut notifier).await);

        let task = view.task().unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.title, "Write report");
        assert_eq!(view.phase(), ViewPhase::Ready);
        assert_eq!(
            notifier.latest().unwrap().message,
            "Task updated successfully"
        );
    }

    #[tokio::test]
    async fn submit_blank_title_is_rejected_locally() {
        let svc = FakeService::with_tasks(&["Keep"]);
        let id = svc.snapshot()[0].id.to_string();
        let mut notifier = Notifier::new();
        let mut view = DetailView::new(id);
        view.load(&svc, &mut notifier).await;
        let calls = svc.calls();

        view.form_mut().title = "".into();
        assert!(!view.submit(&svc, &mut notifier).await);

        assert_eq!(svc.calls(), calls);
        assert_eq!(view.task().unwrap().title, "Keep");
        assert_eq!(notifier.latest().unwrap().message, "Title is required");
    }

    #[tokio::test]
    async fn submit_failure_leaves_task_unchanged() {
        let svc = FakeService::with_tasks(&["Keep"]);
        let id = svc.snapshot()[0].id.to_string();
        let mut notifier = Notifier::new();
        let mut view = DetailView::new(id);
        view.load(&svc, &mut notifier).await;
        let before = view.task().cloned();

        svc.set_failing(true);
        view.form_mut().title = "Changed".into();
        assert!(!view.submit(&svc, &mut notifier).await);

        assert_eq!(view.task().cloned(), before);
        assert_eq!(view.phase(), ViewPhase::Error);
        assert_eq!(notifier.latest().unwrap().message, "Failed to update task");
    }
}
