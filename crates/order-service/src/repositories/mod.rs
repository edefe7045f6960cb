//! In-memory order table.

pub mod orders;

use crate::models::{Order, OrderItem, OrderStatus};
use chrono::NaiveDateTime;
use tokio::sync::RwLock;

/// Shared store handed to handlers.
#[derive(Debug, Default)]
pub struct Database {
    orders: RwLock<Vec<Order>>,
}

impl Database {
    /// A database holding the seed orders.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            orders: RwLock::new(seed_orders()),
        }
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, Vec<Order>> {
        self.orders.read().await
    }

    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, Vec<Order>> {
        self.orders.write().await
    }

    /// Restore the seed orders.
    pub async fn reset(&self) {
        *self.orders.write().await = seed_orders();
        tracing::info!(target: "order.repositories", "Order database reset to seed data");
    }
}

fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").unwrap_or_default()
}

fn item(product_id: i64, product_name: &str, quantity: i64, price: f64) -> OrderItem {
    OrderItem {
        product_id,
        product_name: product_name.to_string(),
        quantity,
        price,
    }
}

const HOME_ADDRESS: &str = "123 Main St, City, State 12345";

/// The three seed orders.
#[must_use]
pub fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            user_id: 1,
            items: vec![item(1, "Laptop", 1, 999.99), item(2, "Wireless Mouse", 2, 29.99)],
            total_amount: 1059.97,
            status: OrderStatus::Delivered,
            shipping_address: HOME_ADDRESS.to_string(),
            created_at: timestamp("2025-01-10T10:00:00"),
            updated_at: timestamp("2025-01-15T14:30:00"),
        },
        Order {
            id: 2,
            user_id: 2,
            items: vec![item(4, "Monitor", 1, 399.99)],
            total_amount: 399.99,
            status: OrderStatus::Pending,
            shipping_address: "456 Oak Ave, Town, State 67890".to_string(),
            created_at: timestamp("2025-01-11T15:20:00"),
            updated_at: timestamp("2025-01-11T15:20:00"),
        },
        Order {
            id: 3,
            user_id: 1,
            items: vec![item(3, "USB-C Cable", 3, 12.99)],
            total_amount: 38.97,
            status: OrderStatus::Shipped,
            shipping_address: HOME_ADDRESS.to_string(),
            created_at: timestamp("2025-01-12T09:15:00"),
            updated_at: timestamp("2025-01-13T11:00:00"),
        },
    ]
}
