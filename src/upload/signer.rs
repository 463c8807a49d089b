/**
 * Upload Credential Signer
 *
 * Computes the media service's authentication parameters: a one-time
 * token, an expiry timestamp, and an HMAC-SHA1 signature of
 * `token + expire` keyed by the account's private key. The result is
 * returned to the client verbatim; nothing is persisted.
 */

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::ApiError;

type HmacSha1 = Hmac<Sha1>;

/// Credential lifetime: 30 minutes
pub const CREDENTIAL_TTL_SECS: u64 = 30 * 60;

/// Signed parameter set returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCredentials {
    /// One-time request token
    pub token: String,
    /// Unix timestamp after which the signature is no longer valid
    pub expire: u64,
    /// Lowercase hex HMAC-SHA1 of `token + expire`
    pub signature: String,
}

/// Media service credential signer
///
/// Constructed once from configuration and carried in the application
/// state. The endpoint and public key are not part of the signature;
/// they are kept so callers that need to describe the target service
/// read them from the same place as the signing key.
#[derive(Clone)]
pub struct UploadSigner {
    url_endpoint: String,
    public_key: String,
    private_key: String,
}

impl UploadSigner {
    pub fn new(url_endpoint: String, public_key: String, private_key: String) -> Self {
        Self {
            url_endpoint,
            public_key,
            private_key,
        }
    }

    /// Media service URL endpoint this signer is bound to
    pub fn url_endpoint(&self) -> &str {
        &self.url_endpoint
    }

    /// Public API key of the media service account
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Compute a fresh signed parameter set
    ///
    /// # Errors
    ///
    /// `CredentialIssuanceFailed` if the clock is unusable or the key
    /// is rejected by the MAC; surfaced as HTTP 500, never propagated
    /// raw.
    pub fn authentication_parameters(&self) -> Result<UploadCredentials, ApiError> {
        let token = Uuid::new_v4().to_string();
        let expire = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ApiError::CredentialIssuanceFailed(format!("system clock error: {}", e)))?
            .as_secs()
            + CREDENTIAL_TTL_SECS;

        let signature = self.sign(&token, expire)?;

        Ok(UploadCredentials {
            token,
            expire,
            signature,
        })
    }

    /// Sign `token + expire` with the private key
    fn sign(&self, token: &str, expire: u64) -> Result<String, ApiError> {
        let mut mac = HmacSha1::new_from_slice(self.private_key.as_bytes())
            .map_err(|e| ApiError::CredentialIssuanceFailed(format!("invalid signing key: {}", e)))?;
        mac.update(token.as_bytes());
        mac.update(expire.to_string().as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
