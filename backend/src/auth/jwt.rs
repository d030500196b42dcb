//! JWT token issuance and verification
//!
//! Tokens are self-contained HS256 JWTs carrying the user id as subject,
//! issued-at, and an absolute expiry. Verification fails closed: any
//! malformed, tampered, subject-less, or expired token yields `None`,
//! never an error.
//!
//! Keys are pre-computed once at startup (they are expensive to derive)
//! and shared via `AppState`.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID, stringified UUID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from the signing secret.
    /// This should be called once at startup.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Cheap to clone (keys are behind Arc); create once at startup and store
/// in AppState.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    default_ttl_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &str, default_ttl_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            default_ttl_secs,
        }
    }

    /// Issue a token for a user with the configured default lifetime
    #[inline]
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        self.issue_with_ttl(user_id, self.default_ttl_secs)
    }

    /// Issue a token with an explicit lifetime in seconds
    pub fn issue_with_ttl(&self, user_id: Uuid, ttl_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return its subject.
    ///
    /// Returns `None` for malformed encoding, signature mismatch, missing
    /// or non-UUID subject, and elapsed expiry. Expiry is exact: no leeway.
    pub fn verify(&self, token: &str) -> Option<Uuid> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, self.keys.decoding(), &validation).ok()?;
        Uuid::parse_str(&token_data.claims.sub).ok()
    }

    /// Token lifetime in seconds (reported to clients as `expires_in`)
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.default_ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 1800)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        assert_eq!(service.verify(&token), Some(user_id));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        // Already expired at issuance
        let token = service.issue_with_ttl(user_id, -1).unwrap();
        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn test_garbage_tokens_are_rejected_without_panic() {
        let service = create_test_service();
        assert_eq!(service.verify(""), None);
        assert_eq!(service.verify("not a token"), None);
        assert_eq!(service.verify("a.b"), None);
        assert_eq!(service.verify("aaaa.bbbb.cccc"), None);
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let service = create_test_service();
        let other = JwtService::new("another-secret", 1800);
        let token = other.issue(Uuid::new_v4()).unwrap();
        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn test_token_without_subject_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
            iat: i64,
        }

        let service = create_test_service();
        let now = Utc::now().timestamp();
        let claims = NoSubject {
            exp: now + 600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn test_non_uuid_subject_is_rejected() {
        let service = create_test_service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            exp: now + 600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn test_expiry_secs_is_reported() {
        let service = create_test_service();
        assert_eq!(service.expiry_secs(), 1800);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone(); // Arc increments only
        let user_id = Uuid::new_v4();
        let token = service.issue(user_id).unwrap();
        assert_eq!(cloned.verify(&token), Some(user_id));
    }
}
