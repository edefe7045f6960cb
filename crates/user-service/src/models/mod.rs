use chrono::{DateTime, NaiveDateTime};
use common::extract::Validate;
use common::pagination::Pagination;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)
    }
}

/// Partial update; empty strings leave the field unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), String> {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => validate_email(email),
            _ => Ok(()),
        }
    }
}

/// Basic shape check: one `@` with a non-empty local part, and a domain of at
/// least two non-empty dot-separated labels.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }

    let mut labels = domain.split('.');
    let first_ok = labels.next().is_some_and(|l| !l.is_empty());
    let rest: Vec<&str> = labels.collect();

    first_ok && !rest.is_empty() && rest.iter().all(|l| !l.is_empty())
}

fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("value is not a valid email address".to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListUsersQuery {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}

impl Validate for ListUsersQuery {
    fn validate(&self) -> Result<(), String> {
        self.pagination().validate()
    }
}

// =============================================================================
// Tasks
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = crate::errors::UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(crate::errors::UserError::InvalidStatus),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub due_date: Option<NaiveDateTime>,
}

/// New task body. `status` is checked by the handler (400, not 422).
#[derive(Debug, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_task_status")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub due_date: Option<NaiveDateTime>,
}

fn default_task_status() -> String {
    TaskStatus::Pending.as_str().to_string()
}

impl Validate for TaskCreate {}

/// Partial update; absent or null fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub due_date: Option<NaiveDateTime>,
}

impl Validate for TaskUpdate {}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListTasksQuery {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}

impl Validate for ListTasksQuery {
    fn validate(&self) -> Result<(), String> {
        self.pagination().validate()
    }
}

/// Accept `YYYY-MM-DDTHH:MM:SS[.fff]`, the same with a space separator, or
/// RFC 3339 with an offset (normalised to UTC).
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn deserialize_optional_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_datetime(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {raw}"))),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
