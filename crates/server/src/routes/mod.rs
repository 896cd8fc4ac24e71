//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Liveness check
//! GET    /health/ready           - Readiness check (pings the database)
//!
//! # Categories
//! GET    /api/categories         - All categories
//! POST   /api/categories         - Create category
//! GET    /api/categories/{id}    - One category
//! PATCH  /api/categories/{id}    - Update category, returns the id
//! DELETE /api/categories/{id}    - Delete category, returns the id
//!
//! # Products
//! GET    /api/products           - Paged products (?page=&size=)
//! POST   /api/products           - Create product
//! DELETE /api/products           - Delete all products
//! GET    /api/products/{id}      - One product
//! PATCH  /api/products/{id}      - Update product, returns the id
//! DELETE /api/products/{id}      - Delete product
//! ```

pub mod categories;
pub mod products;

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::state::AppState;

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{id}",
            get(categories::show)
                .patch(categories::update)
                .delete(categories::remove),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list)
                .post(products::create)
                .delete(products::remove_all),
        )
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::remove),
        )
}

/// Create all API routes for the catalog.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/categories", category_routes())
        .nest("/api/products", product_routes())
}

/// Build the full application router, including health endpoints and
/// middleware. The binary wraps this with the Sentry tower layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .layer(axum::middleware::from_fn(
            crate::middleware::request_id_middleware,
        ))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
