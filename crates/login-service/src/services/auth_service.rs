//! Credential checks and token minting for the login flows.

use crate::errors::LoginError;
use crate::models::{LoginResponse, TOKEN_TYPE};
use crate::repositories::users::{User, UserDirectory};
use common::jwt::TokenAuthority;
use tracing::instrument;

/// Verified against when the username is unknown, so both failure paths pay
/// the same bcrypt cost.
const DUMMY_HASH: &str = "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewY5GyYqExt7YD3a";

/// Verify a password against a bcrypt hash off the async runtime.
///
/// A hash that fails to parse counts as a mismatch.
async fn verify_password(password: &str, hash: &str) -> Result<bool, LoginError> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || match bcrypt::verify(&password, &hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(target: "login.auth", error = %e, "Stored password hash is unusable");
            false
        }
    })
    .await
    .map_err(|e| LoginError::Internal(format!("password verification task failed: {e}")))
}

fn login_response(user: &User, access_token: String) -> LoginResponse {
    LoginResponse {
        access_token,
        token_type: TOKEN_TYPE.to_string(),
        user_id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
    }
}

/// Authenticate a username/password pair and issue a fresh token.
///
/// Unknown usernames and wrong passwords fail identically.
#[instrument(skip_all, fields(username = %username))]
pub async fn login_with_credentials(
    directory: &UserDirectory,
    authority: &TokenAuthority,
    username: &str,
    password: &str,
) -> Result<LoginResponse, LoginError> {
    let user = directory.get_by_username(username);
    let hash = user.map_or(DUMMY_HASH, |u| u.password_hash.as_str());

    let is_valid = verify_password(password, hash).await?;

    let user = match user {
        Some(user) if is_valid => user,
        _ => {
            tracing::info!(target: "login.auth", "Credential login rejected");
            return Err(LoginError::InvalidCredentials);
        }
    };

    let token = authority
        .issue(user.id, &user.username, &user.role)
        .map_err(|e| LoginError::Internal(e.to_string()))?;

    tracing::info!(target: "login.auth", user_id = user.id, "Credential login succeeded");
    Ok(login_response(user, token))
}

/// Re-authenticate with an existing token; the token is echoed back.
#[instrument(skip_all)]
pub fn login_with_token(
    directory: &UserDirectory,
    authority: &TokenAuthority,
    token: &str,
) -> Result<LoginResponse, LoginError> {
    let claims = authority.verify(token)?;

    let user = directory.get_by_id(claims.subject_id).ok_or_else(|| {
        tracing::info!(target: "login.auth", user_id = claims.subject_id, "Token names unknown user");
        LoginError::UnknownTokenSubject
    })?;

    Ok(login_response(user, token.to_string()))
}
