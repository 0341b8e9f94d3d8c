//! Terminal view for paths that match no route.

use crate::route::{Navigator, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundAction {
    /// "Back to Home".
    GoHome,
    /// "Go Back".
    GoBack,
}

#[derive(Debug, Clone)]
pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn actions(&self) -> &'static [NotFoundAction] {
        &[NotFoundAction::GoHome, NotFoundAction::GoBack]
    }

    /// Perform an action, returning the route navigated to.
    pub fn act(&self, action: NotFoundAction, navigator: &mut Navigator) -> Route {
        match action {
            NotFoundAction::GoHome => navigator.home().clone(),
            NotFoundAction::GoBack => navigator.back().clone(),
        }
    }
}
