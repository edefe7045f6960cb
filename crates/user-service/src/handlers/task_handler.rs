use super::AppState;
use crate::errors::UserError;
use crate::models::{ListTasksQuery, Task, TaskCreate, TaskStatus, TaskUpdate};
use crate::repositories::tasks;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::extract::{ValidatedJson, ValidatedQuery};
use std::sync::Arc;

/// GET /users/:user_id/tasks
pub async fn handle_list_user_tasks(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Task>>, UserError> {
    let tables = state.db.read().await;
    Ok(Json(tasks::list_for_user(&tables, user_id)?))
}

/// GET /users/:user_id/tasks/:task_id
pub async fn handle_get_user_task(
    State(state): State<Arc<AppState>>,
    Path((user_id, task_id)): Path<(i64, i64)>,
) -> Result<Json<Task>, UserError> {
    let tables = state.db.read().await;
    Ok(Json(tasks::get(&tables, user_id, task_id)?))
}

/// POST /users/:user_id/tasks
pub async fn handle_create_task(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<TaskCreate>,
) -> Result<(StatusCode, Json<Task>), UserError> {
    let mut tables = state.db.write().await;
    let task = tasks::create(&mut tables, user_id, payload)?;

    tracing::info!(target: "user.handlers", user_id, task_id = task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /users/:user_id/tasks/:task_id
pub async fn handle_update_task(
    State(state): State<Arc<AppState>>,
    Path((user_id, task_id)): Path<(i64, i64)>,
    ValidatedJson(payload): ValidatedJson<TaskUpdate>,
) -> Result<Json<Task>, UserError> {
    let mut tables = state.db.write().await;
    Ok(Json(tasks::update(&mut tables, user_id, task_id, payload)?))
}

/// DELETE /users/:user_id/tasks/:task_id
pub async fn handle_delete_task(
    State(state): State<Arc<AppState>>,
    Path((user_id, task_id)): Path<(i64, i64)>,
) -> Result<StatusCode, UserError> {
    let mut tables = state.db.write().await;
    tasks::delete(&mut tables, user_id, task_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// All tasks across users
///
/// GET /tasks?status&limit&offset
pub async fn handle_list_all_tasks(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, UserError> {
    let status = query
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<TaskStatus>)
        .transpose()?;

    let tables = state.db.read().await;
    Ok(Json(query.pagination().apply(tasks::list_all(&tables, status))))
}
