//! Catalog services: orchestration of validation-adjacent lookups and
//! mutations over the store traits.
//!
//! Services speak transport records at their boundary; the mapping layer is
//! invoked exactly here. Domain misses surface as [`CatalogError::NotFound`]
//! as soon as a required lookup fails and are never caught locally.

pub mod categories;
pub mod products;

#[cfg(test)]
pub(crate) mod support;

use thiserror::Error;

use crate::db::RepositoryError;
use crate::error::ErrorCode;

pub use categories::CategoryService;
pub use products::ProductService;

/// Service-boundary error for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required entity lookup missed.
    #[error("{}", .0.message())]
    NotFound(ErrorCode),

    /// The store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
