use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::error_response;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Test type '{0}' not found")]
    UnknownTestType(String),

    #[error("Report '{0}' not found")]
    ReportNotFound(String),

    #[error("HTML report '{0}' not found")]
    HtmlNotFound(String),

    #[error("Failed to read report: {0}")]
    Unreadable(String),
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = match self {
            ReportError::UnknownTestType(_)
            | ReportError::ReportNotFound(_)
            | ReportError::HtmlNotFound(_) => StatusCode::NOT_FOUND,
            ReportError::Unreadable(ref reason) => {
                tracing::error!(target: "report.errors", reason = %reason, "Report could not be read");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            }
        };

        error_response(status, self.to_string())
    }
}
