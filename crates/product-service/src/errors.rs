use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::error_response;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,

    #[error("SKU already exists")]
    SkuExists,

    #[error("Insufficient stock")]
    InsufficientStock,
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match self {
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::SkuExists | ProductError::InsufficientStock => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
