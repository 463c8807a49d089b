//! Upload Module
//!
//! Signed upload credential issuance for the external media service.
//! The backend never proxies uploads; it only computes the short-lived
//! authentication parameters the client presents to the service
//! directly.

/// Credential signing
pub mod signer;

/// HTTP handler
pub mod handlers;

pub use signer::{UploadCredentials, UploadSigner};
