//! Transport records accepted at and returned by the API boundary.
//!
//! Requests carry an explicit [`validate`](CategoryRequest::validate) step
//! that handlers invoke before constructing domain calls; a non-empty error
//! list never reaches a service.

use serde::{Deserialize, Serialize};

use catalog_core::{CategoryId, ProductId};

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Request body for creating or updating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
    pub color: String,
    pub image_url: String,
    /// May be blank.
    pub description: String,
}

impl CategoryRequest {
    /// Validate this request, returning one entry per failing field.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "must not be blank",
            });
        }
        if self.color.trim().is_empty() {
            errors.push(FieldError {
                field: "color",
                message: "must not be blank",
            });
        }
        if self.image_url.trim().is_empty() {
            errors.push(FieldError {
                field: "imageUrl",
                message: "must not be blank",
            });
        }
        errors
    }
}

/// External shape of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub image_url: String,
    pub description: String,
}

/// Request body for creating or updating a product.
///
/// The target category is named, not referenced by id; the service resolves
/// the name before persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub price: i64,
    pub image_url: String,
    pub category_name: String,
}

impl ProductRequest {
    /// Validate this request, returning one entry per failing field.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "must not be blank",
            });
        }
        if self.price < 0 {
            errors.push(FieldError {
                field: "price",
                message: "must not be negative",
            });
        }
        if self.image_url.trim().is_empty() {
            errors.push(FieldError {
                field: "imageUrl",
                message: "must not be blank",
            });
        }
        if self.category_name.trim().is_empty() {
            errors.push(FieldError {
                field: "categoryName",
                message: "must not be blank",
            });
        }
        errors
    }
}

/// External shape of a product.
///
/// Exposes the name of the associated category, never its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub image_url: String,
    pub category_name: String,
}
