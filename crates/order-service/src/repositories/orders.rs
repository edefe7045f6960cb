//! Order table operations.
//!
//! Timestamps are passed in by the caller so the lifecycle rules can be
//! tested without a clock.

use crate::errors::OrderError;
use crate::models::{
    parse_optional_status, round2, CancelResponse, ListOrdersQuery, Order, OrderCreate,
    OrderStatus, OrderSummary, OrderUpdate,
};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Filtered and paginated listing.
///
/// # Errors
///
/// `InvalidStatus` if the status filter is not a known status.
pub fn list(orders: &[Order], query: &ListOrdersQuery) -> Result<Vec<Order>, OrderError> {
    let status = parse_optional_status(query.status.as_deref())?;

    let matching = orders
        .iter()
        .filter(|o| query.user_id.map_or(true, |id| o.user_id == id))
        .filter(|o| status.map_or(true, |s| o.status == s))
        .cloned();

    Ok(query.pagination().apply(matching))
}

pub fn get(orders: &[Order], order_id: i64) -> Result<Order, OrderError> {
    orders
        .iter()
        .find(|o| o.id == order_id)
        .cloned()
        .ok_or(OrderError::NotFound)
}

fn find_mut(orders: &mut [Order], order_id: i64) -> Result<&mut Order, OrderError> {
    orders
        .iter_mut()
        .find(|o| o.id == order_id)
        .ok_or(OrderError::NotFound)
}

/// Place a new pending order. The total is the rounded sum of line amounts.
pub fn create(
    orders: &mut Vec<Order>,
    new_order: OrderCreate,
    now: NaiveDateTime,
) -> Result<Order, OrderError> {
    if new_order.items.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    #[allow(clippy::cast_precision_loss)]
    let total: f64 = new_order
        .items
        .iter()
        .map(|item| item.quantity as f64 * item.price)
        .sum();

    let order = Order {
        id: orders.iter().map(|o| o.id).max().map_or(1, |max| max + 1),
        user_id: new_order.user_id,
        items: new_order.items,
        total_amount: round2(total),
        status: OrderStatus::Pending,
        shipping_address: new_order.shipping_address,
        created_at: now,
        updated_at: now,
    };
    orders.push(order.clone());

    Ok(order)
}

/// Change status and/or shipping address.
///
/// The requested status is validated before the current one is checked, so a
/// bad status on a closed order still reports `InvalidStatus`.
pub fn update(
    orders: &mut [Order],
    order_id: i64,
    update: OrderUpdate,
    now: NaiveDateTime,
) -> Result<Order, OrderError> {
    let order = find_mut(orders, order_id)?;
    let new_status = parse_optional_status(update.status.as_deref())?;

    if order.status.is_final() {
        return Err(OrderError::NotUpdatable(order.status));
    }

    if let Some(status) = new_status {
        order.status = status;
    }
    if let Some(address) = update.shipping_address {
        order.shipping_address = address;
    }
    order.updated_at = now;

    Ok(order.clone())
}

/// Cancel a pending or processing order.
pub fn cancel(
    orders: &mut [Order],
    order_id: i64,
    now: NaiveDateTime,
) -> Result<CancelResponse, OrderError> {
    let order = find_mut(orders, order_id)?;

    if !order.status.is_cancellable() {
        return Err(OrderError::NotCancellable(order.status));
    }

    order.status = OrderStatus::Cancelled;
    order.updated_at = now;

    Ok(CancelResponse {
        message: "Order cancelled successfully".to_string(),
        order_id,
        status: order.status,
    })
}

pub fn delete(orders: &mut Vec<Order>, order_id: i64) -> Result<(), OrderError> {
    let before = orders.len();
    orders.retain(|o| o.id != order_id);
    if orders.len() == before {
        return Err(OrderError::NotFound);
    }
    Ok(())
}

/// Totals for one user. A user without orders gets zeros and an empty map.
#[must_use]
pub fn summary(orders: &[Order], user_id: i64) -> OrderSummary {
    let mut orders_by_status = BTreeMap::new();
    let mut total_orders = 0;
    let mut total_spent = 0.0;

    for order in orders.iter().filter(|o| o.user_id == user_id) {
        total_orders += 1;
        total_spent += order.total_amount;
        *orders_by_status.entry(order.status).or_insert(0) += 1;
    }

    OrderSummary {
        user_id,
        total_orders,
        total_spent: round2(total_spent),
        orders_by_status,
    }
}
