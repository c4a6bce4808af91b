//! Request handlers.
//!
//! Handlers validate input, delegate to the repository in `orangeslice_db`,
//! and map errors via [`crate::error::AppError`].

pub mod project;
pub mod query;
