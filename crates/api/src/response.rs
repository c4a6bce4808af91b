//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "items": [...] }` envelope used by the structured-query interface.
///
/// The plain-HTTP read handler returns a bare array; the structured-query
/// surface wraps the same records in an items wrapper.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: Vec<T>,
}
