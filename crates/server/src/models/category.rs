//! Category domain types.

use chrono::{DateTime, Utc};

use catalog_core::CategoryId;

/// A catalog category (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique category ID, store-assigned.
    pub id: CategoryId,
    /// Display name, unique across the store.
    pub name: String,
    /// Display color (e.g. "#ffffff").
    pub color: String,
    /// Image URL.
    pub image_url: String,
    /// Free-text description, may be blank.
    pub description: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Field set for a category about to be persisted.
///
/// Built by the mapping layer from an already-validated request. The id and
/// timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub image_url: String,
    pub description: String,
}
