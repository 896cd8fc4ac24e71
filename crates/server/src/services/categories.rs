//! Category CRUD orchestration.

use catalog_core::CategoryId;

use crate::db::RepositoryError;
use crate::error::ErrorCode;
use crate::mappers;
use crate::store::CategoryStore;
use crate::transport::{CategoryRequest, CategoryResponse};

use super::CatalogError;

/// Orchestrates category CRUD, enforcing existence invariants.
#[derive(Clone)]
pub struct CategoryService<S> {
    store: S,
}

impl<S: CategoryStore> CategoryService<S> {
    /// Create a new category service over a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All categories in store-native order; empty when none exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the store fails.
    pub async fn get_all(&self) -> Result<Vec<CategoryResponse>, CatalogError> {
        let categories = self.store.find_all().await?;
        Ok(categories.iter().map(mappers::category_to_response).collect())
    }

    /// The category for `id`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` with `CATEGORY_NOT_FOUND` when no row
    /// matches.
    pub async fn get_by_id(&self, id: CategoryId) -> Result<CategoryResponse, CatalogError> {
        let category = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(ErrorCode::CategoryNotFound))?;
        Ok(mappers::category_to_response(&category))
    }

    /// Persist a new category and return its record.
    ///
    /// The request is assumed validated at the API boundary. Duplicate names
    /// surface as a store conflict.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` on conflict or store failure.
    pub async fn create(&self, request: &CategoryRequest) -> Result<CategoryResponse, CatalogError> {
        let created = self
            .store
            .save(&mappers::category_from_request(request))
            .await?;
        tracing::debug!(id = %created.id, name = %created.name, "category created");
        Ok(mappers::category_to_response(&created))
    }

    /// Overwrite all mutable fields of an existing category and return its id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` with `CATEGORY_NOT_FOUND` when the
    /// category does not exist; no mutation happens on that path.
    pub async fn update(
        &self,
        id: CategoryId,
        request: &CategoryRequest,
    ) -> Result<CategoryId, CatalogError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(ErrorCode::CategoryNotFound))?;

        self.store
            .update(id, &mappers::category_from_request(request))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound(ErrorCode::CategoryNotFound),
                e => CatalogError::Store(e),
            })?;

        Ok(id)
    }

    /// Delete the category with `id` unconditionally and return the id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` with a conflict when products still
    /// reference the category.
    pub async fn delete_by_id(&self, id: CategoryId) -> Result<CategoryId, CatalogError> {
        self.store.delete_by_id(id).await?;
        tracing::debug!(id = %id, "category deleted");
        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::support::InMemoryCategoryStore;
    use super::*;

    fn request(name: &str) -> CategoryRequest {
        CategoryRequest {
            name: name.to_string(),
            color: "#ffffff".to_string(),
            image_url: "https://x.io".to_string(),
            description: String::new(),
        }
    }

    fn service() -> CategoryService<InMemoryCategoryStore> {
        CategoryService::new(InMemoryCategoryStore::new())
    }

    #[tokio::test]
    async fn get_all_empty() {
        let service = service();
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let service = service();
        let created = service.create(&request("Gift Card")).await.unwrap();

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Gift Card");
        assert_eq!(fetched.color, "#ffffff");
        assert_eq!(fetched.description, "");
    }

    #[tokio::test]
    async fn get_all_preserves_store_order() {
        let service = service();
        service.create(&request("A")).await.unwrap();
        service.create(&request("B")).await.unwrap();

        let all = service.get_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn get_by_id_missing_fails_with_category_not_found() {
        let service = service();
        let err = service.get_by_id(CategoryId::new(99)).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound(ErrorCode::CategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn create_duplicate_name_conflicts() {
        let service = service();
        service.create(&request("Gift Card")).await.unwrap();

        let err = service.create(&request("Gift Card")).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Store(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn update_overwrites_all_fields_and_returns_id() {
        let service = service();
        let created = service.create(&request("Gift Card")).await.unwrap();

        let updated_request = CategoryRequest {
            name: "Vouchers".to_string(),
            color: "#000000".to_string(),
            image_url: "https://v.io".to_string(),
            description: "updated".to_string(),
        };
        let id = service.update(created.id, &updated_request).await.unwrap();
        assert_eq!(id, created.id);

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "Vouchers");
        assert_eq!(fetched.color, "#000000");
        assert_eq!(fetched.image_url, "https://v.io");
        assert_eq!(fetched.description, "updated");
    }

    #[tokio::test]
    async fn update_missing_fails_and_mutates_nothing() {
        let service = service();
        service.create(&request("Gift Card")).await.unwrap();

        let err = service
            .update(CategoryId::new(99), &request("Other"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound(ErrorCode::CategoryNotFound)
        ));

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.first().map(|c| c.name.as_str()), Some("Gift Card"));
    }

    #[tokio::test]
    async fn delete_returns_id_and_removes_row() {
        let service = service();
        let created = service.create(&request("Gift Card")).await.unwrap();

        let id = service.delete_by_id(created.id).await.unwrap();
        assert_eq!(id, created.id);

        let err = service.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound(ErrorCode::CategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn delete_missing_is_not_an_error() {
        let service = service();
        let id = service.delete_by_id(CategoryId::new(42)).await.unwrap();
        assert_eq!(id, CategoryId::new(42));
    }
}
