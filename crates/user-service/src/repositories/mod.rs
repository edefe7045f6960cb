//! In-memory tables for users and tasks.
//!
//! Both tables live behind one lock so `reset` and the user-exists checks on
//! task operations see a consistent snapshot.

pub mod tasks;
pub mod users;

use crate::models::{Task, TaskStatus, User};
use chrono::NaiveDateTime;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
}

/// Shared store handed to handlers.
#[derive(Debug, Default)]
pub struct Database {
    tables: RwLock<Tables>,
}

impl Database {
    /// A database holding the seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            tables: RwLock::new(seed_tables()),
        }
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    /// Restore the seed users and tasks.
    pub async fn reset(&self) {
        *self.tables.write().await = seed_tables();
        tracing::info!(target: "user.repositories", "Database reset to seed data");
    }
}

fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").unwrap_or_default()
}

/// Seed users and tasks.
#[must_use]
pub fn seed_tables() -> Tables {
    let users = vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ];

    let tasks = vec![
        Task {
            id: 1,
            user_id: 1,
            title: "Complete project documentation".to_string(),
            description: Some("Write comprehensive API documentation".to_string()),
            status: TaskStatus::Pending,
            created_at: timestamp("2025-01-15T10:00:00"),
            updated_at: timestamp("2025-01-15T10:00:00"),
            due_date: Some(timestamp("2025-01-20T23:59:59")),
        },
        Task {
            id: 2,
            user_id: 1,
            title: "Review pull requests".to_string(),
            description: Some("Review and merge pending PRs".to_string()),
            status: TaskStatus::Completed,
            created_at: timestamp("2025-01-14T09:00:00"),
            updated_at: timestamp("2025-01-15T14:30:00"),
            due_date: None,
        },
        Task {
            id: 3,
            user_id: 2,
            title: "Prepare presentation".to_string(),
            description: Some("Create slides for team meeting".to_string()),
            status: TaskStatus::Pending,
            created_at: timestamp("2025-01-15T11:00:00"),
            updated_at: timestamp("2025-01-15T11:00:00"),
            due_date: Some(timestamp("2025-01-18T15:00:00")),
        },
    ];

    Tables { users, tasks }
}

/// Next id for a table: `max(id) + 1`, or 1 when empty.
pub(crate) fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}
