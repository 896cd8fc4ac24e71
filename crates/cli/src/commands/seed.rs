//! Seed the database with sample catalog data.
//!
//! Safe to run repeatedly: categories upsert on name, products are only
//! inserted when a product with the same name does not already exist.

use catalog_server::config::CatalogConfig;
use catalog_server::db;

use super::CliError;

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("Gift Card", "#ffffff", "https://cdn.example.com/gift-card.png", ""),
    (
        "Snacks",
        "#f4a259",
        "https://cdn.example.com/snacks.png",
        "Sweet and salty things",
    ),
    (
        "Beverages",
        "#5b8e7d",
        "https://cdn.example.com/beverages.png",
        "Hot and cold drinks",
    ),
];

const PRODUCTS: &[(&str, i64, &str, &str)] = &[
    ("10 EUR voucher", 1000, "https://cdn.example.com/voucher-10.png", "Gift Card"),
    ("Chocolate bar", 250, "https://cdn.example.com/chocolate.png", "Snacks"),
    ("Sparkling water", 120, "https://cdn.example.com/water.png", "Beverages"),
];

/// Seed sample categories and products.
///
/// # Errors
///
/// Returns `CliError` if configuration loading, the database connection or a
/// query fails.
pub async fn run() -> Result<(), CliError> {
    let config = CatalogConfig::from_env()?;

    tracing::info!("Connecting to catalog database...");
    let pool = db::create_pool(&config.database_url).await?;

    for (name, color, image_url, description) in CATEGORIES {
        sqlx::query(
            r"
            INSERT INTO categories (name, color, image_url, description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO NOTHING
            ",
        )
        .bind(name)
        .bind(color)
        .bind(image_url)
        .bind(description)
        .execute(&pool)
        .await?;
    }
    tracing::info!(count = CATEGORIES.len(), "categories seeded");

    for (name, price, image_url, category_name) in PRODUCTS {
        sqlx::query(
            r"
            INSERT INTO products (name, price, image_url, category_id)
            SELECT $1, $2, $3, c.id
            FROM categories c
            WHERE c.name = $4
              AND NOT EXISTS (SELECT 1 FROM products p WHERE p.name = $1)
            ",
        )
        .bind(name)
        .bind(price)
        .bind(image_url)
        .bind(category_name)
        .execute(&pool)
        .await?;
    }
    tracing::info!(count = PRODUCTS.len(), "products seeded");

    Ok(())
}
