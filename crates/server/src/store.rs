//! Store traits: the persistence boundary for each entity.
//!
//! Services depend only on these traits; the `db` module provides the
//! `PostgreSQL`-backed implementations and tests use in-memory ones.

use async_trait::async_trait;

use catalog_core::{CategoryId, Page, PageRequest, ProductId};

use crate::db::RepositoryError;
use crate::models::{Category, NewCategory, NewProduct, Product};

/// Persistence boundary for categories.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories in store-native order.
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Look up a category by id.
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError>;

    /// Look up a category by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;

    /// Persist a new category and return it with its assigned id.
    ///
    /// Fails with `RepositoryError::Conflict` when the name is taken.
    async fn save(&self, category: &NewCategory) -> Result<Category, RepositoryError>;

    /// Overwrite every mutable field of an existing category.
    ///
    /// Fails with `RepositoryError::NotFound` when no row matches.
    async fn update(&self, id: CategoryId, category: &NewCategory) -> Result<(), RepositoryError>;

    /// Delete a category unconditionally; an absent row is not an error.
    ///
    /// Fails with `RepositoryError::Conflict` when products still reference
    /// the category.
    async fn delete_by_id(&self, id: CategoryId) -> Result<(), RepositoryError>;
}

/// Persistence boundary for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// One page of products with total-element metadata.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Product>, RepositoryError>;

    /// Look up a product by id, category hydrated.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Persist a new product and return it with its assigned id.
    async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Overwrite every mutable field of an existing product.
    ///
    /// Fails with `RepositoryError::NotFound` when no row matches.
    async fn update(&self, id: ProductId, product: &NewProduct) -> Result<(), RepositoryError>;

    /// Delete a product unconditionally; an absent row is not an error.
    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError>;

    /// Delete every product, returning the number of rows removed.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
