//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for issued tokens and error bodies.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use serde::Deserialize;

/// JWT header structure
#[derive(Debug, Deserialize)]
struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

/// Claims Payload as it appears on the wire
#[derive(Debug, Deserialize)]
struct JwtClaims {
    pub user_id: i64,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

fn decode_section<T: for<'de> Deserialize<'de>>(token: &str, index: usize, what: &str) -> T {
    let section = token
        .split('.')
        .nth(index)
        .unwrap_or_else(|| panic!("token has no {what} section"));
    let bytes = URL_SAFE_NO_PAD
        .decode(section)
        .unwrap_or_else(|e| panic!("Failed to base64 decode token {what}: {e}"));
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Failed to parse token {what}: {e}"))
}

/// Custom assertions for issued tokens
///
/// Claims are inspected without verifying the signature.
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_for_user(1)
///     .assert_role("admin")
///     .assert_expires_in(3600);
/// ```
pub trait TokenAssertions {
    /// Assert that the token is a three-section HS256 JWT with a Claims Payload
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the token is for the specified user id
    fn assert_for_user(&self, user_id: i64) -> &Self;

    /// Assert the username claim
    fn assert_username(&self, username: &str) -> &Self;

    /// Assert the role claim
    fn assert_role(&self, role: &str) -> &Self;

    /// Assert `exp - iat` equals `seconds` and expiry is in the future
    fn assert_expires_in(&self, seconds: i64) -> &Self;
}

impl TokenAssertions for String {
    fn assert_valid_jwt(&self) -> &Self {
        assert_eq!(
            self.split('.').count(),
            3,
            "JWT must have 3 parts (header.payload.signature)"
        );

        let header: JwtHeader = decode_section(self, 0, "header");
        assert_eq!(header.alg, "HS256", "Expected HS256 algorithm");
        assert_eq!(header.typ, "JWT", "Expected JWT type");

        let _claims: JwtClaims = decode_section(self, 1, "payload");
        self
    }

    fn assert_for_user(&self, user_id: i64) -> &Self {
        let claims: JwtClaims = decode_section(self, 1, "payload");
        assert_eq!(claims.user_id, user_id, "Token user_id mismatch");
        self
    }

    fn assert_username(&self, username: &str) -> &Self {
        let claims: JwtClaims = decode_section(self, 1, "payload");
        assert_eq!(claims.username, username, "Token username mismatch");
        self
    }

    fn assert_role(&self, role: &str) -> &Self {
        let claims: JwtClaims = decode_section(self, 1, "payload");
        assert_eq!(claims.role, role, "Token role mismatch");
        self
    }

    fn assert_expires_in(&self, seconds: i64) -> &Self {
        let claims: JwtClaims = decode_section(self, 1, "payload");
        assert_eq!(claims.exp - claims.iat, seconds, "Token lifetime mismatch");
        assert!(claims.exp > Utc::now().timestamp(), "Token already expired");
        self
    }
}

/// Assert a JSON error body is exactly `{"detail": expected}`.
pub fn assert_detail(body: &serde_json::Value, expected: &str) {
    assert_eq!(
        body,
        &serde_json::json!({ "detail": expected }),
        "Unexpected error body"
    );
}
