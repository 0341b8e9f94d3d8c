//! Per-view state machines.
//!
//! Every view follows the same lifecycle:
//!
//! ```text
//! Idle -> Loading -> Ready | Error
//! Ready -> Submitting -> Ready (updated) | Error (local state unchanged)
//! ```
//!
//! No transition retries on its own; each is triggered by a user action or
//! a response.

pub mod dashboard;
pub mod detail;
pub mod not_found;

pub use dashboard::DashboardView;
pub use detail::DetailView;
pub use not_found::{NotFoundAction, NotFoundView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Submitting,
    Error,
}
