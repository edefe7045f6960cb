use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::error_response;
use common::jwt::TokenError;
use common::middleware::AuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token verified but names a user that no longer exists.
    #[error("User not found")]
    UnknownTokenSubject,

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<TokenError> for LoginError {
    fn from(err: TokenError) -> Self {
        LoginError::Unauthorized(AuthError::Token(err))
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        match self {
            LoginError::InvalidCredentials | LoginError::UnknownTokenSubject => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            LoginError::UserNotFound => error_response(StatusCode::NOT_FOUND, self.to_string()),
            LoginError::Unauthorized(err) => err.into_response(),
            LoginError::Internal(reason) => {
                tracing::error!(target: "login.errors", reason = %reason, "Internal error");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
