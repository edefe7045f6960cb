//! Builder patterns for test tokens
//!
//! Produces tokens with arbitrary claims, secrets and header algorithms, so
//! tests can exercise every rejection path of the Token Authority.

use crate::fixtures::TEST_SECRET;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};

/// Builder for creating test bearer tokens
///
/// # Example
/// ```rust,ignore
/// let token = TestTokenBuilder::new()
///     .for_user(2, "user1")
///     .with_role("user")
///     .expires_in(-60)
///     .build();
/// ```
pub struct TestTokenBuilder {
    claims: Map<String, Value>,
    secret: String,
    algorithm: Algorithm,
}

impl TestTokenBuilder {
    /// Create a new token builder with defaults
    ///
    /// Defaults: user 1 `admin` with role `admin`, issued now, valid for an
    /// hour, signed HS256 with [`TEST_SECRET`].
    pub fn new() -> Self {
        let now = Utc::now();
        let claims = json!({
            "user_id": 1,
            "username": "admin",
            "role": "admin",
            "iat": now.timestamp(),
            "exp": (now + Duration::hours(1)).timestamp(),
        });

        Self {
            claims: match claims {
                Value::Object(map) => map,
                _ => Map::new(),
            },
            secret: TEST_SECRET.to_string(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Set the subject id and name
    pub fn for_user(mut self, user_id: i64, username: &str) -> Self {
        self.claims.insert("user_id".to_string(), json!(user_id));
        self.claims.insert("username".to_string(), json!(username));
        self
    }

    /// Set the role
    pub fn with_role(mut self, role: &str) -> Self {
        self.claims.insert("role".to_string(), json!(role));
        self
    }

    /// Set expiration in seconds from now (negative for already expired)
    pub fn expires_in(mut self, seconds: i64) -> Self {
        let exp = (Utc::now() + Duration::seconds(seconds)).timestamp();
        self.claims.insert("exp".to_string(), json!(exp));
        self
    }

    /// Set an arbitrary claim
    pub fn with_claim(mut self, name: &str, value: Value) -> Self {
        self.claims.insert(name.to_string(), value);
        self
    }

    /// Remove a claim entirely
    pub fn without_claim(mut self, name: &str) -> Self {
        self.claims.remove(name);
        self
    }

    /// Sign with a different secret
    pub fn signed_with(mut self, secret: &str) -> Self {
        self.secret = secret.to_string();
        self
    }

    /// Sign with a different HMAC algorithm (e.g. `HS512`)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Build the signed compact token
    pub fn build(self) -> String {
        encode(
            &Header::new(self.algorithm),
            &Value::Object(self.claims),
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .expect("test token encodes")
    }

    /// Build an unsigned token with header `{"alg":"none"}` and an empty signature
    pub fn build_unsigned(self) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(Value::Object(self.claims).to_string());
        format!("{header}.{payload}.")
    }
}

impl Default for TestTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Flip the first character of the signature section.
pub fn tamper_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').expect("token has a signature section");
    let mut chars: Vec<char> = signature.chars().collect();
    let first = chars.first_mut().expect("signature is not empty");
    *first = if *first == 'A' { 'B' } else { 'A' };
    format!("{head}.{}", chars.into_iter().collect::<String>())
}

/// Replace the payload section with different claims, keeping the signature.
pub fn tamper_payload(token: &str, claims: &Value) -> String {
    let mut sections = token.split('.');
    let header = sections.next().expect("token has a header section");
    let _payload = sections.next().expect("token has a payload section");
    let signature = sections.next().expect("token has a signature section");
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.{signature}")
}
