//! Request extractors that validate their input.
//!
//! On failure both extractors answer `{"detail": "..."}` instead of axum's
//! plain-text rejections. Malformed or wrongly-typed input and failed
//! [`Validate`] checks are `422 Unprocessable Entity`; a missing JSON content
//! type stays `415`.

use crate::error::error_response;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::{request::Parts, StatusCode},
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;
use std::ops::{Deref, DerefMut};

/// Semantic checks run after deserialization.
pub trait Validate {
    /// # Errors
    ///
    /// Returns the message reported to the caller.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// JSON body extractor with `{"detail"}` rejections and [`Validate`] checks.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Extract the inner value from the `ValidatedJson` wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

fn json_rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        other => other.status(),
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(target: "common.extract", error = %rejection, "JSON body rejected");
            error_response(json_rejection_status(&rejection), rejection.body_text())
        })?;

        value.validate().map_err(|detail| {
            tracing::debug!(target: "common.extract", detail = %detail, "JSON body failed validation");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, detail)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Query string extractor with `{"detail"}` rejections and [`Validate`] checks.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(target: "common.extract", error = %rejection, "Query string rejected");
                error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|detail| error_response(StatusCode::UNPROCESSABLE_ENTITY, detail))?;

        Ok(ValidatedQuery(value))
    }
}
