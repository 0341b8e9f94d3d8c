//! Ties routing, views and notifications together.

use std::sync::Arc;

use crate::notify::Notifier;
use crate::route::{Navigator, Route};
use crate::service::TaskService;
use crate::view::{DashboardView, DetailView, NotFoundAction, NotFoundView};

/// The view mounted for the current route.
#[derive(Debug)]
pub enum ActiveView {
    Dashboard(DashboardView),
    Detail(DetailView),
    NotFound(NotFoundView),
}

/// Client application state.
pub struct App {
    service: Arc<dyn TaskService>,
    navigator: Navigator,
    notifier: Notifier,
    view: Option<ActiveView>,
}

impl App {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            navigator: Navigator::new(),
            notifier: Notifier::new(),
            view: None,
        }
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn view(&self) -> Option<&ActiveView> {
        self.view.as_ref()
    }

    pub fn notifier(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Navigate to `path` and mount the matching view.
    pub async fn open(&mut self, path: &str) {
        let route = self.navigator.navigate(path).clone();
        self.mount(route).await;
    }

    /// Run a not-found action and mount wherever it leads.
    pub async fn not_found_action(&mut self, action: NotFoundAction) {
        let Some(ActiveView::NotFound(view)) = &self.view else {
            return;
        };
        let route = view.act(action, &mut self.navigator);
        self.mount(route).await;
    }

    async fn mount(&mut self, route: Route) {
        let service = Arc::clone(&self.service);
        let view = match route {
            Route::Dashboard => {
                let mut view = DashboardView::new();
                view.load(service.as_ref(), &mut self.notifier).await;
                ActiveView::Dashboard(view)
            }
            Route::TaskDetail { id } => {
                let mut view = DetailView::new(id);
                match view.load(service.as_ref(), &mut self.notifier).await {
                    None => ActiveView::Detail(view),
                    Some(redirect) => {
                        self.navigator.push(redirect);
                        let mut view = DashboardView::new();
                        view.load(service.as_ref(), &mut self.notifier).await;
                        ActiveView::Dashboard(view)
                    }
                }
            }
            Route::NotFound { path } => ActiveView::NotFound(NotFoundView::new(path)),
        };
        self.view = Some(view);
    }

    /// The mounted dashboard, if that is the current view.
    pub fn dashboard_mut(&mut self) -> Option<(&mut DashboardView, &dyn TaskService, &mut Notifier)> {
        match &mut self.view {
            Some(ActiveView::Dashboard(view)) => {
                Some((view, self.service.as_ref(), &mut self.notifier))
            }
            _ => None,
        }
    }

    /// The mounted detail view, if that is the current view.
    pub fn detail_mut(&mut self) -> Option<(&mut DetailView, &dyn TaskService, &mut Notifier)> {
        match &mut self.view {
            Some(ActiveView::Detail(view)) => Some((view, self.service.as_ref(), &mut self.notifier)),
            _ => None,
        }
    }
}
