//! Client-side routes and navigation history.
//!
//! ```text
//! /              -> Dashboard
//! /tasks/{id}    -> TaskDetail
//! *              -> NotFound
//! ```

/// A resolved client route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    TaskDetail { id: String },
    NotFound { path: String },
}

impl Route {
    /// Resolve a path against the route table. Query strings and fragments
    /// are ignored, as is a single trailing slash.
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Route::Dashboard;
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["tasks", id] if !id.is_empty() => Route::TaskDetail { id: id.to_string() },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::TaskDetail { id } => format!("/tasks/{id}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Path to a task's detail view.
    pub fn task_path(id: impl std::fmt::Display) -> String {
        format!("/tasks/{id}")
    }
}

static HOME: Route = Route::Dashboard;

/// Navigation history. The current route is the top of the stack.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            history: vec![Route::Dashboard],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        // History always holds at least one entry.
        self.history.last().unwrap_or(&HOME)
    }

    /// Resolve `path` and push it onto the history.
    pub fn navigate(&mut self, path: &str) -> &Route {
        self.push(Route::resolve(path))
    }

    pub fn push(&mut self, route: Route) -> &Route {
        tracing::debug!(path = %route.path(), "Navigating");
        self.history.push(route);
        self.current()
    }

    /// Go to the dashboard.
    pub fn home(&mut self) -> &Route {
        self.push(Route::Dashboard)
    }

    /// Return to the previous route; with no history, go home.
    pub fn back(&mut self) -> &Route {
        self.history.pop();
        if self.history.is_empty() {
            self.history.push(Route::Dashboard);
        }
        self.current()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
