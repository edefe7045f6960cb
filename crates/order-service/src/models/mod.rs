use crate::errors::OrderError;
use chrono::NaiveDateTime;
use common::extract::Validate;
use common::pagination::Pagination;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Order lifecycle states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Delivered and cancelled orders are closed to edits.
    #[must_use]
    pub fn is_final(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    #[must_use]
    pub fn is_cancellable(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(OrderError::InvalidStatus)
    }
}

/// Parse an optional status; empty strings count as absent.
///
/// # Errors
///
/// `InvalidStatus` for anything outside [`OrderStatus::ALL`].
pub fn parse_optional_status(raw: Option<&str>) -> Result<Option<OrderStatus>, OrderError> {
    raw.filter(|s| !s.is_empty())
        .map(str::parse::<OrderStatus>)
        .transpose()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}

impl OrderItem {
    fn validate(&self) -> Result<(), String> {
        if self.quantity <= 0 {
            return Err("quantity must be greater than 0".to_string());
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err("price must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub shipping_address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New order body. An empty `items` list is a business error (400), not a
/// validation error, so it is checked by the repository.
#[derive(Debug, Deserialize)]
pub struct OrderCreate {
    pub user_id: i64,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
}

impl Validate for OrderCreate {
    fn validate(&self) -> Result<(), String> {
        self.items.iter().try_for_each(OrderItem::validate)
    }
}

/// Status and shipping address are the only mutable fields.
#[derive(Debug, Default, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<String>,
    pub shipping_address: Option<String>,
}

impl Validate for OrderUpdate {}

#[derive(Debug, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub user_id: Option<i64>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListOrdersQuery {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}

impl Validate for ListOrdersQuery {
    fn validate(&self) -> Result<(), String> {
        self.pagination().validate()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CancelResponse {
    pub message: String,
    pub order_id: i64,
    pub status: OrderStatus,
}

/// Per-user totals. `orders_by_status` only holds statuses with at least one
/// order.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    pub user_id: i64,
    pub total_orders: usize,
    pub total_spent: f64,
    pub orders_by_status: BTreeMap<OrderStatus, usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Round a currency amount to cents.
#[must_use]
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
