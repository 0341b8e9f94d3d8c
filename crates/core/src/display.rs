//! Human-facing rendering helpers shared by every task front end.

use crate::task::{TaskPriority, TaskStatus};
use crate::types::Timestamp;

/// Shown in place of an absent or blank description.
pub const NO_DESCRIPTION: &str = "No description provided";

/// Badge label for a status, e.g. `in-progress` -> `In-progress`.
pub fn status_label(status: TaskStatus) -> String {
    capitalize(status.as_str())
}

/// Badge label for a priority, e.g. `high` -> `High`.
pub fn priority_label(priority: TaskPriority) -> String {
    capitalize(priority.as_str())
}

/// The description, or [`NO_DESCRIPTION`] when there is nothing to show.
pub fn description_or_placeholder(description: Option<&str>) -> &str {
    match description {
        Some(d) if !d.trim().is_empty() => d,
        _ => NO_DESCRIPTION,
    }
}

/// Short date used on list cards, e.g. `Mar 4, 2025`.
pub fn format_short_date(ts: &Timestamp) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Long date-time used on the detail view, e.g. `March 4, 2025 09:05`.
pub fn format_long_date(ts: &Timestamp) -> String {
    ts.format("%B %-d, %Y %H:%M").to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
