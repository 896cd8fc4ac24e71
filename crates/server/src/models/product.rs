//! Product domain types.

use chrono::{DateTime, Utc};

use catalog_core::{CategoryId, ProductId};

use super::Category;

/// A catalog product (domain type).
///
/// Carries its resolved [`Category`]; repositories hydrate it with a join so
/// callers never chase the reference themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique product ID, store-assigned.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Integer price.
    pub price: i64,
    /// Image URL.
    pub image_url: String,
    /// The category this product belongs to.
    pub category: Category,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Field set for a product about to be persisted.
///
/// The category reference is already resolved to an id; resolution by name is
/// the service's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub image_url: String,
    pub category_id: CategoryId,
}
