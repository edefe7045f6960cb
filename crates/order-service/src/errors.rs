use crate::models::OrderStatus;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::error_response;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order not found")]
    NotFound,

    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Invalid status. Must be one of: pending, processing, shipped, delivered, cancelled")]
    InvalidStatus,

    #[error("Cannot update order with status '{0}'")]
    NotUpdatable(OrderStatus),

    #[error("Cannot cancel order with status '{0}'")]
    NotCancellable(OrderStatus),
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match self {
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::EmptyOrder
            | OrderError::InvalidStatus
            | OrderError::NotUpdatable(_)
            | OrderError::NotCancellable(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
