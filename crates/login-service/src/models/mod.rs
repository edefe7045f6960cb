use common::extract::Validate;
use serde::{Deserialize, Serialize};

/// Token type reported in every login response.
pub const TOKEN_TYPE: &str = "bearer";

#[derive(Debug, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl Validate for LoginCredentials {}

#[derive(Debug, Deserialize)]
pub struct TokenLogin {
    pub token: String,
}

impl Validate for TokenLogin {}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
