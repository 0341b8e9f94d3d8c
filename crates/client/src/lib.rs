//! Tusker task client.
//!
//! A typed HTTP client for the task API plus the view logic of the task
//! front end: routing, per-view state machines, form drafts and the
//! notification queue. Rendering is kept separate in [`render`] so the
//! same state can drive any surface.

pub mod app;
pub mod error;
pub mod form;
pub mod notify;
pub mod render;
pub mod route;
pub mod service;
pub mod view;

#[cfg(test)]
pub(crate) mod fake;
