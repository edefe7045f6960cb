//! Token Authority shared by every service.
//!
//! Issues and verifies tamper-evident, time-bounded bearer tokens signed with
//! a symmetric secret known to every service at deployment time. Tokens are
//! compact JWS strings (`header.claims.signature`) signed with HS256, so they
//! interoperate with any HS256 JWT library holding the same secret.
//!
//! # Security
//!
//! - Tokens are size-checked BEFORE parsing
//! - Only HS256 is accepted; the `alg` header never selects the verifier
//! - Signatures are compared in constant time
//! - The failure kind is never exposed by [`TokenAuthority::introspect`]
//! - `subject_name` is redacted in `Claims` Debug output
//!
//! # Usage
//!
//! ```rust,ignore
//! let authority = TokenAuthority::new(&jwt_config);
//!
//! let token = authority.issue(1, "admin", "admin")?;
//! let claims = authority.verify(&token)?;
//! assert_eq!(claims.role, "admin");
//! ```

use crate::clock::{Clock, SystemClock};
use crate::config::JwtConfig;
use crate::observability::metrics::{record_token_issuance, record_token_verification};
use crate::secret::ExposeSecret;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

// =============================================================================
// Constants
// =============================================================================

/// The one signing algorithm used for issuing and verifying.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Maximum accepted token size in bytes (8KB).
///
/// Issued tokens are ~200 bytes. Anything above this is rejected as
/// `Malformed` before any base64 decoding or HMAC computation.
pub const MAX_TOKEN_SIZE_BYTES: usize = 8192;

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a token is rejected by [`TokenAuthority::verify`].
///
/// All three are terminal and surface to end callers as "unauthorized".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Token does not parse as `header.claims.signature` or its claims are
    /// not a Claims Payload.
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match (tampering, wrong secret, or wrong algorithm).
    #[error("Invalid token signature")]
    SignatureInvalid,

    /// Signature is valid but the token is past its `exp`.
    #[error("Token has expired")]
    Expired,
}

impl TokenError {
    /// Bounded label for metrics.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::SignatureInvalid => "signature_invalid",
            TokenError::Expired => "expired",
        }
    }
}

/// Signing failed while issuing a token.
#[derive(Error, Debug)]
#[error("Token signing operation failed: {0}")]
pub struct IssueError(String);

// =============================================================================
// Claims Types
// =============================================================================

/// Claims Payload embedded in every token.
///
/// Wire names (`user_id`, `username`, `role`, `iat`, `exp`) are part of the
/// cross-service contract and must not change.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated principal.
    #[serde(rename = "user_id")]
    pub subject_id: i64,

    /// Display identifier, informational only. Redacted in Debug output.
    #[serde(rename = "username")]
    pub subject_name: String,

    /// Capability tag, e.g. `"admin"` or `"user"`.
    pub role: String,

    /// Issued-at timestamp (Unix epoch seconds).
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Expiration timestamp (Unix epoch seconds).
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("subject_id", &self.subject_id)
            .field("subject_name", &"[REDACTED]")
            .field("role", &self.role)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl Claims {
    /// Time between issuance and expiry.
    #[must_use]
    pub fn lifetime(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.expires_at - self.issued_at)
    }
}

/// Result of [`TokenAuthority::introspect`].
///
/// An invalid token serializes to exactly `{"valid":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Introspection {
    pub valid: bool,

    #[serde(rename = "user_id", default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,

    #[serde(rename = "username", default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Introspection {
    /// The response for any rejected token.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            valid: false,
            subject_id: None,
            subject_name: None,
            role: None,
        }
    }
}

impl From<Claims> for Introspection {
    fn from(claims: Claims) -> Self {
        Self {
            valid: true,
            subject_id: Some(claims.subject_id),
            subject_name: Some(claims.subject_name),
            role: Some(claims.role),
        }
    }
}

// =============================================================================
// Token Authority
// =============================================================================

/// Stateless issuer/verifier parameterized by the shared secret and lifetime.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TokenAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("algorithm", &ALGORITHM)
            .field("keys", &"[REDACTED]")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenAuthority {
    /// Creates an authority that reads time from the system clock.
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an authority with an explicit time source.
    #[must_use]
    pub fn with_clock(config: &JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let secret = config.secret.expose_secret().as_bytes();

        // Expiry is checked against `clock`, not by jsonwebtoken against the
        // system time, and without leeway.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            lifetime: config.token_lifetime(),
            clock,
        }
    }

    /// Lifetime applied to every issued token.
    #[must_use]
    pub fn lifetime(&self) -> chrono::Duration {
        self.lifetime
    }

    /// Mint a token for an authenticated principal.
    ///
    /// `issued_at = now`, `expires_at = now + lifetime`. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `IssueError` if the expiry overflows the calendar or the claims
    /// cannot be signed.
    #[instrument(skip_all)]
    pub fn issue(
        &self,
        subject_id: i64,
        subject_name: &str,
        role: &str,
    ) -> Result<String, IssueError> {
        let now = self.clock.now();
        let expires_at = now.checked_add_signed(self.lifetime).ok_or_else(|| {
            tracing::error!(target: "common.jwt", lifetime = %self.lifetime, "Token expiry out of range");
            record_token_issuance("error");
            IssueError("expiry out of range".to_string())
        })?;
        let claims = Claims {
            subject_id,
            subject_name: subject_name.to_string(),
            role: role.to_string(),
            issued_at: now.timestamp(),
            expires_at: expires_at.timestamp(),
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(target: "common.jwt", error = %e, "Token signing failed");
            record_token_issuance("error");
            IssueError(e.to_string())
        })?;

        record_token_issuance("success");
        Ok(token)
    }

    /// Verify a token and return its Claims Payload.
    ///
    /// Checks, in order: size, structure, signature (HS256 only), expiry.
    ///
    /// # Errors
    ///
    /// - `Malformed` - oversized, not three sections, undecodable header or claims
    /// - `SignatureInvalid` - header algorithm is not HS256 or the HMAC does not match
    /// - `Expired` - `now > expires_at`
    #[instrument(skip_all)]
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let result = self.verify_token(token);

        match &result {
            Ok(_) => record_token_verification("success", None),
            Err(e) => record_token_verification("error", Some(e.category())),
        }

        result
    }

    /// Verify a token, reporting only whether it is valid and its claims.
    ///
    /// The failure kind is deliberately dropped.
    #[instrument(skip_all)]
    pub fn introspect(&self, token: &str) -> Introspection {
        match self.verify(token) {
            Ok(claims) => Introspection::from(claims),
            Err(_) => Introspection::invalid(),
        }
    }

    fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        if token.len() > MAX_TOKEN_SIZE_BYTES {
            tracing::debug!(
                target: "common.jwt",
                token_size = token.len(),
                max_size = MAX_TOKEN_SIZE_BYTES,
                "Token rejected: size exceeds maximum allowed"
            );
            return Err(TokenError::Malformed);
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let kind = classify(e.kind());
                tracing::debug!(
                    target: "common.jwt",
                    error = %e,
                    category = kind.category(),
                    "Token verification failed"
                );
                kind
            })?;

        let claims = token_data.claims;
        let now = self.clock.now().timestamp();

        if now > claims.expires_at {
            tracing::debug!(
                target: "common.jwt",
                exp = claims.expires_at,
                now = now,
                "Token rejected: expired"
            );
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

/// Map jsonwebtoken failures onto the three-way taxonomy.
fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::SignatureInvalid,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
