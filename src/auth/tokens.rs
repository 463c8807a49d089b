/**
 * Bearer Token Handling
 *
 * JWT creation and verification. The secret is passed in explicitly
 * (it lives in `AppConfig`) rather than read from a process-wide
 * global, so tests and the middleware share one code path.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime: 30 days
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
///
/// `sub` carries the opaque user identifier the rest of the backend
/// keys on. It is never taken from a request body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Stable user identifier
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a signed token for a user
///
/// # Arguments
/// * `secret` - HMAC signing secret
/// * `user_id` - Opaque user identifier placed in the `sub` claim
///
/// # Returns
/// Encoded JWT string
pub fn create_token(secret: &str, user_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// # Arguments
/// * `secret` - HMAC signing secret
/// * `token` - JWT string from the Authorization header
///
/// # Returns
/// Decoded claims, or an error if the signature or expiry is invalid
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
