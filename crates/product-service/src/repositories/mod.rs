//! In-memory product table.

pub mod products;

use crate::models::Product;
use tokio::sync::RwLock;

/// Shared store handed to handlers.
#[derive(Debug, Default)]
pub struct Database {
    products: RwLock<Vec<Product>>,
}

impl Database {
    /// A database holding the seed catalogue.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: RwLock::new(seed_products()),
        }
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().await
    }

    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().await
    }

    /// Restore the seed catalogue.
    pub async fn reset(&self) {
        *self.products.write().await = seed_products();
        tracing::info!(target: "product.repositories", "Product database reset to seed data");
    }
}

const SEED_PRODUCTS: &[(i64, &str, &str, f64, i64, &str, &str)] = &[
    (1, "Laptop", "High-performance laptop with 16GB RAM", 999.99, 50, "Electronics", "LAP-001"),
    (2, "Wireless Mouse", "Ergonomic wireless mouse", 29.99, 200, "Accessories", "MOU-001"),
    (3, "USB-C Cable", "Fast charging USB-C cable 2m", 12.99, 500, "Accessories", "CAB-001"),
    (4, "Monitor", "27-inch 4K monitor", 399.99, 30, "Electronics", "MON-001"),
];

/// The four seed products.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|&(id, name, description, price, stock, category, sku)| Product {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            price,
            stock,
            category: category.to_string(),
            sku: sku.to_string(),
        })
        .collect()
}
