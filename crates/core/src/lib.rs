//! Domain types and pure validation logic for the Tusker task tracker.
//!
//! Nothing in this crate performs I/O. The store (`tusker-db`), the HTTP
//! layer (`tusker-api`) and the client (`tusker-client`) all share these
//! definitions so the task resource has exactly one shape.

pub mod display;
pub mod error;
pub mod task;
pub mod types;
pub mod validation;
