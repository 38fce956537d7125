// JWT issuance and verification for Enrollify.
//
// HS256 with a shared secret; the fixed token lifetime is the only
// invalidation mechanism (no revocation list, no refresh tokens).

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};
use std::env;

use crate::error::AuthError;
use enrollify_config::AuthConfig;

/// Signs and verifies bearer tokens against the shared secret.
pub struct JwtGuard {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl JwtGuard {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Build a guard from the `ACCESS_TOKEN_SECRET` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingSecret` if the variable is not set.
    pub fn from_env(config: &AuthConfig) -> Result<Self, AuthError> {
        let secret = env::var("ACCESS_TOKEN_SECRET").map_err(|_| AuthError::MissingSecret)?;
        Ok(Self::new(&secret, config.token_ttl_seconds))
    }

    /// Sign a caller-supplied claims object with a fixed expiry.
    ///
    /// The payload is taken as-is (tokens are opaque bags of claims here);
    /// only `iat` and `exp` are stamped server-side. The claims must be a
    /// JSON object so the registered claims have somewhere to live.
    pub fn issue(&self, claims: Value) -> Result<String, AuthError> {
        let Value::Object(mut claims) = claims else {
            return Err(AuthError::InvalidClaims);
        };

        let now = Utc::now().timestamp();
        claims.insert("iat".to_string(), json!(now));
        claims.insert("exp".to_string(), json!(now + self.ttl_seconds));

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verify a token's signature and expiry and return the decoded claims.
    ///
    /// All failure modes collapse into `AuthError::Unauthorized`; the guard
    /// never leaks why a token was rejected.
    pub fn verify(&self, token: &str) -> Result<Value, AuthError> {
        let data = decode::<Value>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AuthError::Unauthorized)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> JwtGuard {
        JwtGuard::new("test-secret-key-for-testing", 86_400)
    }

    #[test]
    fn issue_and_verify_roundtrip_preserves_claims() {
        let guard = guard();
        let token = guard
            .issue(json!({ "email": "student@example.com" }))
            .unwrap();

        let claims = guard.verify(&token).unwrap();
        assert_eq!(claims["email"], json!("student@example.com"));
        assert!(claims["exp"].is_i64());
        assert!(claims["iat"].is_i64());
    }

    #[test]
    fn token_signed_with_different_secret_is_rejected() {
        let other = JwtGuard::new("a-completely-different-secret", 86_400);
        let token = other.issue(json!({ "email": "a@b.c" })).unwrap();

        assert!(guard().verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Negative TTL puts exp well past the default leeway.
        let expired = JwtGuard::new("test-secret-key-for-testing", -3_600);
        let token = expired.issue(json!({ "email": "a@b.c" })).unwrap();

        assert!(guard().verify(&token).is_err());
    }

    #[test]
    fn non_object_claims_are_rejected() {
        let result = guard().issue(json!("just-a-string"));
        assert!(matches!(result, Err(AuthError::InvalidClaims)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(guard().verify("not-a-token").is_err());
    }
}
