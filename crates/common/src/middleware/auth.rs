//! Authentication middleware for protected routes.
//!
//! Extracts the Bearer token from the Authorization header, verifies it with
//! the service's own [`TokenAuthority`], and injects the [`Claims`] into
//! request extensions. Every failure is a uniform 401.

use crate::error::ErrorBody;
use crate::jwt::{Claims, TokenAuthority, TokenError};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

/// State for the authentication middleware.
#[derive(Clone)]
pub struct AuthState {
    pub authority: Arc<TokenAuthority>,
}

/// Why a request was not authenticated.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingCredentials,

    #[error("Invalid authentication credentials")]
    InvalidScheme,

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl AuthError {
    /// Message returned to the caller.
    ///
    /// `Malformed` and `SignatureInvalid` share one message.
    #[must_use]
    pub fn detail(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Not authenticated",
            AuthError::InvalidScheme => "Invalid authentication credentials",
            AuthError::Token(TokenError::Expired) => "Token has expired",
            AuthError::Token(TokenError::Malformed | TokenError::SignatureInvalid) => {
                "Invalid token"
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let mut response =
            (StatusCode::UNAUTHORIZED, Json(ErrorBody::new(self.detail()))).into_response();
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        response
    }
}

/// Extract the Bearer token from the Authorization header.
///
/// The scheme is matched case-insensitively.
///
/// # Errors
///
/// - `MissingCredentials` if the header is absent, not ASCII, or empty
/// - `InvalidScheme` if the scheme is not `Bearer` or the token is empty
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            tracing::debug!(target: "common.middleware.auth", "Missing Authorization header");
            AuthError::MissingCredentials
        })?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => {
            tracing::debug!(target: "common.middleware.auth", "Invalid Authorization header format");
            Err(AuthError::InvalidScheme)
        }
    }
}

/// Authentication middleware for bearer tokens.
///
/// # Response
///
/// - Returns 401 Unauthorized if the token is missing or fails verification
/// - Continues to next handler with `Claims` in extensions if the token is valid
#[instrument(skip_all, name = "common.middleware.auth")]
pub async fn require_auth(
    State(state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers())?;
    let claims = state.authority.verify(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Extractor for the claims verified by [`require_auth`].
///
/// Rejects with 401 on routes where the middleware was not applied.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::MissingCredentials)
    }
}
