//! Axum extractors for request handling
//!
//! Custom extractors for validation, pagination, and viewer identity.

mod pagination;
mod validated;
mod viewer;

pub use pagination::{Pagination, PaginationParams};
pub use validated::{JsonBody, ValidatedJson};
pub use viewer::{Viewer, ViewerParams};
