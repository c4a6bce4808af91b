//! Gallery client for the OrangeSlice project showcase.
//!
//! Models the browser side of the application: fetching the record list
//! through an ordered chain of data sources (structured query, plain HTTP,
//! static fallback), submitting new records, and the synchronous
//! search/tag filtering the gallery grid runs on every change.

pub mod demo;
pub mod error;
pub mod filter;
pub mod model;
pub mod source;
pub mod state;

pub use error::ClientError;
pub use model::{Project, ProjectDraft};
pub use source::{
    fetch_with_fallback, GalleryClient, PlainHttpSource, ProjectSource, StaticSource,
    StructuredQuerySource,
};
pub use state::GalleryState;
