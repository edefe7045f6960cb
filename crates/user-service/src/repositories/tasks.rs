//! Task table operations. Every operation first requires the owning user.

use super::{next_id, users, Tables};
use crate::errors::UserError;
use crate::models::{Task, TaskCreate, TaskStatus, TaskUpdate};
use chrono::{NaiveDateTime, Utc};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn require_user(tables: &Tables, user_id: i64) -> Result<(), UserError> {
    if users::exists(tables, user_id) {
        Ok(())
    } else {
        Err(UserError::UserNotFound)
    }
}

/// All tasks of one user, in insertion order.
pub fn list_for_user(tables: &Tables, user_id: i64) -> Result<Vec<Task>, UserError> {
    require_user(tables, user_id)?;
    Ok(tables
        .tasks
        .iter()
        .filter(|t| t.user_id == user_id)
        .cloned()
        .collect())
}

/// All tasks, optionally restricted to one status.
pub fn list_all(tables: &Tables, status: Option<TaskStatus>) -> Vec<Task> {
    tables
        .tasks
        .iter()
        .filter(|t| status.map_or(true, |s| t.status == s))
        .cloned()
        .collect()
}

pub fn get(tables: &Tables, user_id: i64, task_id: i64) -> Result<Task, UserError> {
    require_user(tables, user_id)?;
    tables
        .tasks
        .iter()
        .find(|t| t.id == task_id && t.user_id == user_id)
        .cloned()
        .ok_or(UserError::TaskNotFound)
}

pub fn create(tables: &mut Tables, user_id: i64, new_task: TaskCreate) -> Result<Task, UserError> {
    require_user(tables, user_id)?;
    let status: TaskStatus = new_task.status.parse()?;

    let now = now();
    let task = Task {
        id: next_id(tables.tasks.iter().map(|t| t.id)),
        user_id,
        title: new_task.title,
        description: new_task.description,
        status,
        created_at: now,
        updated_at: now,
        due_date: new_task.due_date,
    };
    tables.tasks.push(task.clone());

    Ok(task)
}

/// Apply a partial update and bump `updated_at`.
pub fn update(
    tables: &mut Tables,
    user_id: i64,
    task_id: i64,
    update: TaskUpdate,
) -> Result<Task, UserError> {
    require_user(tables, user_id)?;
    let status = update
        .status
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<TaskStatus>())
        .transpose()?;

    let task = tables
        .tasks
        .iter_mut()
        .find(|t| t.id == task_id && t.user_id == user_id)
        .ok_or(UserError::TaskNotFound)?;

    if let Some(title) = update.title {
        task.title = title;
    }
    if let Some(description) = update.description {
        task.description = Some(description);
    }
    if let Some(status) = status {
        task.status = status;
    }
    if let Some(due_date) = update.due_date {
        task.due_date = Some(due_date);
    }
    task.updated_at = now();

    Ok(task.clone())
}

pub fn delete(tables: &mut Tables, user_id: i64, task_id: i64) -> Result<(), UserError> {
    require_user(tables, user_id)?;
    let position = tables
        .tasks
        .iter()
        .position(|t| t.id == task_id && t.user_id == user_id)
        .ok_or(UserError::TaskNotFound)?;
    tables.tasks.remove(position);
    Ok(())
}
