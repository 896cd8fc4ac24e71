//! Conversions between domain entities and transport records.
//!
//! All functions here are pure and total; category resolution happens in the
//! services before these are called.

use crate::models::{Category, NewCategory, NewProduct, Product};
use crate::transport::{CategoryRequest, CategoryResponse, ProductRequest, ProductResponse};

/// External shape of a category.
#[must_use]
pub fn category_to_response(category: &Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        name: category.name.clone(),
        color: category.color.clone(),
        image_url: category.image_url.clone(),
        description: category.description.clone(),
    }
}

/// Persistable field set from a validated category request.
#[must_use]
pub fn category_from_request(request: &CategoryRequest) -> NewCategory {
    NewCategory {
        name: request.name.clone(),
        color: request.color.clone(),
        image_url: request.image_url.clone(),
        description: request.description.clone(),
    }
}

/// External shape of a product, substituting the category's name for the
/// category reference.
#[must_use]
pub fn product_to_response(product: &Product) -> ProductResponse {
    ProductResponse {
        id: product.id,
        name: product.name.clone(),
        price: product.price,
        image_url: product.image_url.clone(),
        category_name: product.category.name.clone(),
    }
}

/// Persistable field set from a validated product request and its resolved
/// category.
#[must_use]
pub fn product_from_request(request: &ProductRequest, category: &Category) -> NewProduct {
    NewProduct {
        name: request.name.clone(),
        price: request.price,
        image_url: request.image_url.clone(),
        category_id: category.id,
    }
}
