//! Plain-text rendering of views for the terminal front end.

use std::fmt::Write;

use tusker_core::display::{
    description_or_placeholder, format_long_date, format_short_date, priority_label, status_label,
};
use tusker_core::task::Task;

use crate::app::ActiveView;
use crate::notify::{Notification, Severity};
use crate::route::Route;
use crate::view::{DashboardView, DetailView, NotFoundAction, NotFoundView, ViewPhase};

pub fn render_view(view: &ActiveView) -> String {
    match view {
        ActiveView::Dashboard(v) => render_dashboard(v),
        ActiveView::Detail(v) => render_detail(v),
        ActiveView::NotFound(v) => render_not_found(v),
    }
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::from("My Tasks\n\n");
    if view.phase() == ViewPhase::Loading {
        out.push_str("Loading tasks...\n");
        return out;
    }
    if view.tasks().is_empty() {
        out.push_str("No tasks found\n");
        out.push_str("Use `tusker add` to create your first task.\n");
        return out;
    }
    for task in view.tasks() {
        out.push_str(&render_card(task));
        out.push('\n');
    }
    out
}

/// One task as shown in the list.
pub fn render_card(task: &Task) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", task.title);
    let _ = writeln!(
        out,
        "  {}",
        description_or_placeholder(task.description.as_deref())
    );
    let _ = writeln!(
        out,
        "  [{}] [{}]",
        status_label(task.status),
        priority_label(task.priority)
    );
    let _ = writeln!(out, "  Created on {}", format_short_date(&task.created_at));
    let _ = writeln!(out, "  {}", Route::task_path(task.id));
    out
}

pub fn render_detail(view: &DetailView) -> String {
    let Some(task) = view.task() else {
        return "Loading task...\n".to_string();
    };
    let mut out = String::new();
    let _ = writeln!(out, "{}", task.title);
    let _ = writeln!(
        out,
        "Status: {}    Priority: {}",
        status_label(task.status),
        priority_label(task.priority)
    );
    let _ = writeln!(out, "Created: {}", format_long_date(&task.created_at));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        description_or_placeholder(task.description.as_deref())
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "id: {}", task.id);
    out
}

pub fn render_not_found(view: &NotFoundView) -> String {
    let mut out = String::from("404\nPage Not Found\n");
    let _ = writeln!(
        out,
        "The page you are looking for ({}) doesn't exist or has been moved.",
        view.path()
    );
    for action in view.actions() {
        let label = match action {
            NotFoundAction::GoHome => "Back to Home (tusker open /)",
            NotFoundAction::GoBack => "Go Back",
        };
        let _ = writeln!(out, "  - {label}");
    }
    out
}

pub fn render_notification(notification: &Notification) -> String {
    let tag = match notification.severity {
        Severity::Success => "ok",
        Severity::Error => "error",
    };
    format!("[{tag}] {}", notification.message)
}
