use super::AppState;
use crate::errors::ProductError;
use crate::models::{
    CategoriesResponse, ListProductsQuery, MessageResponse, Product, ProductCreate, ProductUpdate,
    StockQuery, StockUpdateResponse,
};
use crate::repositories::products;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::extract::{ValidatedJson, ValidatedQuery};
use common::middleware::AuthUser;
use std::sync::Arc;

/// List products with optional filters
///
/// GET /products?category&min_price&max_price&in_stock&limit&offset
pub async fn handle_list_products(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<ListProductsQuery>,
) -> Json<Vec<Product>> {
    let table = state.db.read().await;
    Json(products::list(&table, &query))
}

/// GET /products/:product_id
pub async fn handle_get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> Result<Json<Product>, ProductError> {
    let table = state.db.read().await;
    Ok(Json(products::get(&table, product_id)?))
}

/// GET /products/sku/:sku
pub async fn handle_get_product_by_sku(
    State(state): State<Arc<AppState>>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, ProductError> {
    let table = state.db.read().await;
    Ok(Json(products::get_by_sku(&table, &sku)?))
}

/// POST /products
pub async fn handle_create_product(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(payload): ValidatedJson<ProductCreate>,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    let mut table = state.db.write().await;
    let product = products::create(&mut table, payload)?;

    tracing::info!(
        target: "product.handlers",
        product_id = product.id,
        by_user = claims.subject_id,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/:product_id
pub async fn handle_update_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ProductUpdate>,
) -> Result<Json<Product>, ProductError> {
    let mut table = state.db.write().await;
    Ok(Json(products::update(&mut table, product_id, payload)?))
}

/// DELETE /products/:product_id
pub async fn handle_delete_product(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, ProductError> {
    let mut table = state.db.write().await;
    products::delete(&mut table, product_id)?;

    tracing::info!(
        target: "product.handlers",
        product_id,
        by_user = claims.subject_id,
        "Product deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Adjust stock by a signed quantity
///
/// PATCH /products/:product_id/stock?quantity=N
pub async fn handle_update_stock(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
    ValidatedQuery(query): ValidatedQuery<StockQuery>,
) -> Result<Json<StockUpdateResponse>, ProductError> {
    let mut table = state.db.write().await;
    Ok(Json(products::adjust_stock(&mut table, product_id, query.quantity)?))
}

/// GET /categories
pub async fn handle_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    let table = state.db.read().await;
    Json(CategoriesResponse {
        categories: products::categories(&table),
    })
}

/// Restore the seed catalogue
///
/// POST /reset-db
pub async fn handle_reset_db(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.db.reset().await;
    Json(MessageResponse {
        message: "Product database reset successfully".to_string(),
    })
}
