use super::AppState;
use crate::errors::OrderError;
use crate::models::{
    CancelResponse, ListOrdersQuery, MessageResponse, Order, OrderCreate, OrderSummary, OrderUpdate,
};
use crate::repositories::orders;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDateTime, Utc};
use common::extract::{ValidatedJson, ValidatedQuery};
use common::middleware::AuthUser;
use std::sync::Arc;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// List orders with optional filters
///
/// GET /orders?user_id&status&limit&offset
pub async fn handle_list_orders(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, OrderError> {
    let table = state.db.read().await;
    Ok(Json(orders::list(&table, &query)?))
}

/// GET /orders/:order_id
pub async fn handle_get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
) -> Result<Json<Order>, OrderError> {
    let table = state.db.read().await;
    Ok(Json(orders::get(&table, order_id)?))
}

/// POST /orders
pub async fn handle_create_order(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(payload): ValidatedJson<OrderCreate>,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let mut table = state.db.write().await;
    let order = orders::create(&mut table, payload, now())?;

    tracing::info!(
        target: "order.handlers",
        order_id = order.id,
        user_id = order.user_id,
        total_amount = order.total_amount,
        by_user = claims.subject_id,
        "Order created"
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /orders/:order_id
pub async fn handle_update_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<OrderUpdate>,
) -> Result<Json<Order>, OrderError> {
    let mut table = state.db.write().await;
    Ok(Json(orders::update(&mut table, order_id, payload, now())?))
}

/// POST /orders/:order_id/cancel
pub async fn handle_cancel_order(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(order_id): Path<i64>,
) -> Result<Json<CancelResponse>, OrderError> {
    let mut table = state.db.write().await;
    let response = orders::cancel(&mut table, order_id, now())?;

    tracing::info!(target: "order.handlers", order_id, by_user = claims.subject_id, "Order cancelled");
    Ok(Json(response))
}

/// GET /users/:user_id/orders/summary
pub async fn handle_user_order_summary(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Json<OrderSummary> {
    let table = state.db.read().await;
    Json(orders::summary(&table, user_id))
}

/// DELETE /orders/:order_id
pub async fn handle_delete_order(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(order_id): Path<i64>,
) -> Result<StatusCode, OrderError> {
    let mut table = state.db.write().await;
    orders::delete(&mut table, order_id)?;

    tracing::info!(target: "order.handlers", order_id, by_user = claims.subject_id, "Order deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Restore the seed orders
///
/// POST /reset-db
pub async fn handle_reset_db(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.db.reset().await;
    Json(MessageResponse {
        message: "Order database reset successfully".to_string(),
    })
}
