//! Database row structs.
//!
//! Rows are decoded with `FromRow` and converted into the shared domain
//! types from `tusker_core`, validating enum columns on the way out.

pub mod task;
