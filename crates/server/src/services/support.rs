//! In-memory store implementations for service unit tests.
//!
//! These mirror the Postgres repositories' observable behavior: assigned ids
//! start at 1, names are unique, and a product's category is hydrated at read
//! time from the category store it was created against.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use catalog_core::{CategoryId, Page, PageRequest, ProductId};

use crate::db::RepositoryError;
use crate::models::{Category, NewCategory, NewProduct, Product};
use crate::store::{CategoryStore, ProductStore};
use crate::transport::CategoryRequest;

#[derive(Default)]
struct CategoryRows {
    rows: Vec<Category>,
    next_id: i64,
}

/// In-memory category store with shared interior, mimicking a table with a
/// unique name constraint.
#[derive(Clone, Default)]
pub struct InMemoryCategoryStore {
    inner: Arc<Mutex<CategoryRows>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CategoryRows> {
        self.inner.lock().expect("category store poisoned")
    }

    /// Test convenience: seed a category straight from a request.
    pub async fn save_request(&self, request: &CategoryRequest) -> Category {
        self.save(&crate::mappers::category_from_request(request))
            .await
            .expect("seed category")
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.lock().rows.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        Ok(self.lock().rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self.lock().rows.iter().find(|c| c.name == name).cloned())
    }

    async fn save(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let mut inner = self.lock();
        if inner.rows.iter().any(|c| c.name == category.name) {
            return Err(RepositoryError::Conflict(
                "category name already exists".to_owned(),
            ));
        }
        inner.next_id += 1;
        let now = Utc::now();
        let row = Category {
            id: CategoryId::new(inner.next_id),
            name: category.name.clone(),
            color: category.color.clone(),
            image_url: category.image_url.clone(),
            description: category.description.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: CategoryId, category: &NewCategory) -> Result<(), RepositoryError> {
        let mut inner = self.lock();
        if inner
            .rows
            .iter()
            .any(|c| c.name == category.name && c.id != id)
        {
            return Err(RepositoryError::Conflict(
                "category name already exists".to_owned(),
            ));
        }
        let Some(row) = inner.rows.iter_mut().find(|c| c.id == id) else {
            return Err(RepositoryError::NotFound);
        };
        row.name = category.name.clone();
        row.color = category.color.clone();
        row.image_url = category.image_url.clone();
        row.description = category.description.clone();
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_by_id(&self, id: CategoryId) -> Result<(), RepositoryError> {
        self.lock().rows.retain(|c| c.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct ProductRows {
    rows: Vec<Product>,
    next_id: i64,
}

/// In-memory product store; hydrates categories from the category store it
/// was created with, the way the Postgres repository joins.
#[derive(Clone)]
pub struct InMemoryProductStore {
    categories: InMemoryCategoryStore,
    inner: Arc<Mutex<ProductRows>>,
}

impl InMemoryProductStore {
    pub fn new(categories: InMemoryCategoryStore) -> Self {
        Self {
            categories,
            inner: Arc::new(Mutex::new(ProductRows::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProductRows> {
        self.inner.lock().expect("product store poisoned")
    }

    fn category(&self, id: CategoryId) -> Result<Category, RepositoryError> {
        self.categories
            .lock()
            .rows
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::Conflict("category no longer exists".to_owned()))
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_page(&self, request: PageRequest) -> Result<Page<Product>, RepositoryError> {
        let inner = self.lock();
        let total = inner.rows.len() as u64;
        let content = inner
            .rows
            .iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(request.size() as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.lock().rows.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let category = self.category(product.category_id)?;
        let mut inner = self.lock();
        inner.next_id += 1;
        let now = Utc::now();
        let row = Product {
            id: ProductId::new(inner.next_id),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            category,
            created_at: now,
            updated_at: now,
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: ProductId, product: &NewProduct) -> Result<(), RepositoryError> {
        let category = self.category(product.category_id)?;
        let mut inner = self.lock();
        let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) else {
            return Err(RepositoryError::NotFound);
        };
        row.name = product.name.clone();
        row.price = product.price;
        row.image_url = product.image_url.clone();
        row.category = category;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.lock().rows.retain(|p| p.id != id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut inner = self.lock();
        let removed = inner.rows.len() as u64;
        inner.rows.clear();
        Ok(removed)
    }
}
