//! Category API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use catalog_core::CategoryId;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::transport::{CategoryRequest, CategoryResponse};

/// List all categories.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CategoryResponse>>> {
    Ok(Json(state.categories().get_all().await?))
}

/// Fetch one category by id.
///
/// # Errors
///
/// Returns `CATEGORY_NOT_FOUND` when no category matches.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<CategoryResponse>> {
    Ok(Json(state.categories().get_by_id(id).await?))
}

/// Create a category.
///
/// # Errors
///
/// Returns a validation error list for blank fields, or a conflict when the
/// name is taken.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>)> {
    let errors = request.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let created = state.categories().create(&request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a category, returning its id.
///
/// # Errors
///
/// Returns `CATEGORY_NOT_FOUND` when no category matches.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<CategoryId>> {
    let errors = request.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(Json(state.categories().update(id, &request).await?))
}

/// Delete a category, returning its id.
///
/// # Errors
///
/// Returns a conflict when products still reference the category.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<CategoryId>> {
    Ok(Json(state.categories().delete_by_id(id).await?))
}
