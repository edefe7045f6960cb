use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::error_response;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Email already exists")]
    EmailExists,

    #[error("Status must be 'pending' or 'completed'")]
    InvalidStatus,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match self {
            UserError::UserNotFound | UserError::TaskNotFound => StatusCode::NOT_FOUND,
            UserError::EmailExists | UserError::InvalidStatus => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
