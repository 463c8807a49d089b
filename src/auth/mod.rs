//! Authentication Module
//!
//! Bearer token claims, creation, and verification. The identity
//! provider that registers users and issues long-lived credentials is
//! external to this backend; this module only verifies the tokens it
//! presents and extracts the stable user identifier from them.

/// Token claims, creation, and verification
pub mod tokens;

pub use tokens::{create_token, verify_token, Claims};
