//! Product API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use catalog_core::{DEFAULT_PAGE_SIZE, Page, PageRequest, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::transport::{ProductRequest, ProductResponse};

/// Pagination query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        Self::new(
            params.page.unwrap_or(0),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// List one page of products.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductResponse>>> {
    Ok(Json(state.products().get_page(params.into()).await?))
}

/// Fetch one product by id.
///
/// # Errors
///
/// Returns `PRODUCT_NOT_FOUND` when no product matches.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductResponse>> {
    Ok(Json(state.products().get_by_id(id).await?))
}

/// Create a product bound to the category named in the request.
///
/// # Errors
///
/// Returns a validation error list for invalid fields, or
/// `CATEGORY_NOT_FOUND` when the named category does not exist.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let errors = request.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let created = state.products().create(&request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a product, returning its id.
///
/// # Errors
///
/// Returns `PRODUCT_NOT_FOUND` when no product matches, or
/// `CATEGORY_NOT_FOUND` when the named category does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<ProductId>> {
    let errors = request.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(Json(state.products().update(id, &request).await?))
}

/// Delete one product.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    state.products().delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every product.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn remove_all(State(state): State<AppState>) -> Result<StatusCode> {
    state.products().delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
