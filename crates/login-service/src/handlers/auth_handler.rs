use crate::config::Config;
use crate::errors::LoginError;
use crate::models::{LoginCredentials, LoginResponse, MessageResponse, TokenLogin, UserInfo};
use crate::repositories::users::UserDirectory;
use crate::services::auth_service;
use axum::{extract::State, http::HeaderMap, Json};
use common::clock::Clock;
use common::extract::ValidatedJson;
use common::jwt::{Introspection, TokenAuthority};
use common::middleware::{extract_bearer_token, AuthUser};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub authority: Arc<TokenAuthority>,
    pub users: Arc<UserDirectory>,
}

impl AppState {
    /// Build state around the seeded user directory and the system clock.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let authority = Arc::new(TokenAuthority::new(&config.jwt));
        Self {
            config,
            authority,
            users: Arc::new(UserDirectory::seeded()),
        }
    }

    /// Same as [`AppState::new`] with an injected clock.
    #[must_use]
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let authority = Arc::new(TokenAuthority::with_clock(&config.jwt, clock));
        Self {
            config,
            authority,
            users: Arc::new(UserDirectory::seeded()),
        }
    }
}

/// Handle credential login
///
/// POST /login/credentials
pub async fn handle_login_credentials(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginCredentials>,
) -> Result<Json<LoginResponse>, LoginError> {
    let response = auth_service::login_with_credentials(
        &state.users,
        &state.authority,
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(Json(response))
}

/// Handle token login
///
/// POST /login/token
pub async fn handle_login_token(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<TokenLogin>,
) -> Result<Json<LoginResponse>, LoginError> {
    let response = auth_service::login_with_token(&state.users, &state.authority, &payload.token)?;
    Ok(Json(response))
}

/// Current user profile
///
/// GET /me
pub async fn handle_me(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<UserInfo>, LoginError> {
    let user = state
        .users
        .get_by_id(claims.subject_id)
        .ok_or(LoginError::UserNotFound)?;

    Ok(Json(UserInfo::from(user)))
}

/// Stateless logout; the client discards its token.
///
/// POST /logout
pub async fn handle_logout(AuthUser(claims): AuthUser) -> Json<MessageResponse> {
    tracing::info!(target: "login.auth", user_id = claims.subject_id, "Logout");
    Json(MessageResponse {
        message: "Successfully logged out. Please discard your token.".to_string(),
    })
}

/// Token introspection
///
/// GET /validate
///
/// A bearer header is required; any presented token yields 200 with either
/// the claims or exactly `{"valid": false}`.
pub async fn handle_validate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Introspection>, LoginError> {
    let token = extract_bearer_token(&headers)?;
    Ok(Json(state.authority.introspect(token)))
}
