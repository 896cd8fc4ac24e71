//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::CatalogConfig;
use crate::db::{CategoryRepository, ProductRepository};
use crate::services::{CategoryService, ProductService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources like the database pool, configuration and the catalog services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CatalogConfig,
    pool: PgPool,
    categories: CategoryService<CategoryRepository>,
    products: ProductService<ProductRepository, CategoryRepository>,
}

impl AppState {
    /// Create a new application state over a connection pool.
    #[must_use]
    pub fn new(config: CatalogConfig, pool: PgPool) -> Self {
        let category_store = CategoryRepository::new(pool.clone());
        let product_store = ProductRepository::new(pool.clone());

        Self {
            inner: Arc::new(AppStateInner {
                categories: CategoryService::new(category_store.clone()),
                products: ProductService::new(product_store, category_store),
                config,
                pool,
            }),
        }
    }

    /// Get a reference to the catalog configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the category service.
    #[must_use]
    pub fn categories(&self) -> &CategoryService<CategoryRepository> {
        &self.inner.categories
    }

    /// Get a reference to the product service.
    #[must_use]
    pub fn products(&self) -> &ProductService<ProductRepository, CategoryRepository> {
        &self.inner.products
    }
}
