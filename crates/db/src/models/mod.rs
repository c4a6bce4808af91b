//! Row models for the record store.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, with camelCase wire names.

pub mod project;
