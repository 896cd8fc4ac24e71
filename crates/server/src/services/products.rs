//! Product CRUD orchestration.
//!
//! Products reference their category by name at the API boundary; this
//! service resolves the name against the category store before any write.

use catalog_core::{Page, PageRequest, ProductId};

use crate::db::RepositoryError;
use crate::error::ErrorCode;
use crate::mappers;
use crate::models::Category;
use crate::store::{CategoryStore, ProductStore};
use crate::transport::{ProductRequest, ProductResponse};

use super::CatalogError;

/// Orchestrates product CRUD, resolving the associated category by name and
/// enforcing existence invariants.
#[derive(Clone)]
pub struct ProductService<P, C> {
    products: P,
    categories: C,
}

impl<P: ProductStore, C: CategoryStore> ProductService<P, C> {
    /// Create a new product service over its stores.
    pub const fn new(products: P, categories: C) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// One page of products, mapped 1:1 from the stored page with its
    /// metadata preserved.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the store fails.
    pub async fn get_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<ProductResponse>, CatalogError> {
        let page = self.products.find_page(request).await?;
        Ok(page.map(|product| mappers::product_to_response(&product)))
    }

    /// The product for `id`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` with `PRODUCT_NOT_FOUND` when no row
    /// matches.
    pub async fn get_by_id(&self, id: ProductId) -> Result<ProductResponse, CatalogError> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(ErrorCode::ProductNotFound))?;
        Ok(mappers::product_to_response(&product))
    }

    /// Resolve the request's category name, persist a new product bound to
    /// that category and return its record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` with `CATEGORY_NOT_FOUND` when the
    /// named category does not exist.
    pub async fn create(&self, request: &ProductRequest) -> Result<ProductResponse, CatalogError> {
        let category = self.resolve_category(&request.category_name).await?;
        let created = self
            .products
            .save(&mappers::product_from_request(request, &category))
            .await?;
        tracing::debug!(id = %created.id, category = %category.name, "product created");
        Ok(mappers::product_to_response(&created))
    }

    /// Overwrite all mutable fields of an existing product, re-resolving its
    /// category reference, and return its id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` with `PRODUCT_NOT_FOUND` when the
    /// product does not exist (checked before any other work, nothing is
    /// mutated on that path), or with `CATEGORY_NOT_FOUND` when the named
    /// category does not resolve.
    pub async fn update(
        &self,
        id: ProductId,
        request: &ProductRequest,
    ) -> Result<ProductId, CatalogError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(ErrorCode::ProductNotFound))?;

        let category = self.resolve_category(&request.category_name).await?;

        self.products
            .update(id, &mappers::product_from_request(request, &category))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound(ErrorCode::ProductNotFound),
                e => CatalogError::Store(e),
            })?;

        Ok(id)
    }

    /// Delete the product with `id` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the store fails.
    pub async fn delete_by_id(&self, id: ProductId) -> Result<(), CatalogError> {
        self.products.delete_by_id(id).await?;
        tracing::debug!(id = %id, "product deleted");
        Ok(())
    }

    /// Delete every product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the store fails.
    pub async fn delete_all(&self) -> Result<(), CatalogError> {
        let removed = self.products.delete_all().await?;
        tracing::debug!(removed, "all products deleted");
        Ok(())
    }

    /// Exact-name category resolution; no case folding, no fuzzy matching.
    async fn resolve_category(&self, name: &str) -> Result<Category, CatalogError> {
        self.categories
            .find_by_name(name)
            .await?
            .ok_or(CatalogError::NotFound(ErrorCode::CategoryNotFound))
    }
}
