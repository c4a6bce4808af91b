//! Domain logic for the OrangeSlice project showcase.
//!
//! Holds the submission DTO, required-field validation, category
//! derivation, and default-value substitution shared by the API server
//! and the repository layer.

pub mod error;
pub mod project;
