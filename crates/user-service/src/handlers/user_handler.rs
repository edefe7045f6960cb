use super::AppState;
use crate::errors::UserError;
use crate::models::{ListUsersQuery, MessageResponse, User, UserCreate, UserUpdate};
use crate::repositories::users;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::extract::{ValidatedJson, ValidatedQuery};
use std::sync::Arc;

/// List users
///
/// GET /users?limit&offset
pub async fn handle_list_users(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<ListUsersQuery>,
) -> Json<Vec<User>> {
    let tables = state.db.read().await;
    Json(query.pagination().apply(users::list(&tables)))
}

/// GET /users/:user_id
pub async fn handle_get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, UserError> {
    let tables = state.db.read().await;
    Ok(Json(users::get(&tables, user_id)?))
}

/// POST /users
pub async fn handle_create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<UserCreate>,
) -> Result<(StatusCode, Json<User>), UserError> {
    let mut tables = state.db.write().await;
    let user = users::create(&mut tables, payload)?;

    tracing::info!(target: "user.handlers", user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:user_id
pub async fn handle_update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserUpdate>,
) -> Result<Json<User>, UserError> {
    let mut tables = state.db.write().await;
    Ok(Json(users::update(&mut tables, user_id, payload)?))
}

/// DELETE /users/:user_id
pub async fn handle_delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, UserError> {
    let mut tables = state.db.write().await;
    users::delete(&mut tables, user_id)?;

    tracing::info!(target: "user.handlers", user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Restore seed users and tasks
///
/// POST /reset-db
pub async fn handle_reset_db(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.db.reset().await;
    Json(MessageResponse {
        message: "Database reset successfully".to_string(),
    })
}
