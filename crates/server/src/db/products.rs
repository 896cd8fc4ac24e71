//! Product repository for database operations.
//!
//! Every read joins the owning category so the domain `Product` comes back
//! fully hydrated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use catalog_core::{CategoryId, Page, PageRequest, ProductId};

use super::RepositoryError;
use crate::models::{Category, NewProduct, Product};
use crate::store::ProductStore;

/// Repository for product database operations.
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    price: i64,
    image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_id: CategoryId,
    category_name: String,
    category_color: String,
    category_image_url: String,
    category_description: String,
    category_created_at: DateTime<Utc>,
    category_updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            image_url: row.image_url,
            category: Category {
                id: row.category_id,
                name: row.category_name,
                color: row.category_color,
                image_url: row.category_image_url,
                description: row.category_description,
                created_at: row.category_created_at,
                updated_at: row.category_updated_at,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_page(&self, request: PageRequest) -> Result<Page<Product>, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT p.id, p.name, p.price, p.image_url, p.created_at, p.updated_at,
                   c.id AS category_id,
                   c.name AS category_name,
                   c.color AS category_color,
                   c.image_url AS category_image_url,
                   c.description AS category_description,
                   c.created_at AS category_created_at,
                   c.updated_at AS category_updated_at
            FROM products p
            JOIN categories c ON c.id = p.category_id
            ORDER BY p.id
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;

        let content = rows.into_iter().map(Product::from).collect();
        Ok(Page::new(content, request, u64::try_from(total).unwrap_or(0)))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT p.id, p.name, p.price, p.image_url, p.created_at, p.updated_at,
                   c.id AS category_id,
                   c.name AS category_name,
                   c.color AS category_color,
                   c.image_url AS category_image_url,
                   c.description AS category_description,
                   c.created_at AS category_created_at,
                   c.updated_at AS category_updated_at
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let id: ProductId = sqlx::query_scalar(
            r"
            INSERT INTO products (name, price, image_url, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict("category no longer exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        self.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::DataCorruption(format!("inserted product {id} not found"))
        })
    }

    async fn update(&self, id: ProductId, product: &NewProduct) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $1, price = $2, image_url = $3, category_id = $4, updated_at = now()
            WHERE id = $5
            ",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.category_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict("category no longer exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
