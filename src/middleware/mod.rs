//! Middleware Module
//!
//! Request-processing middleware. Currently only authentication: the
//! auth gate that runs in front of protected routes and supplies the
//! caller's user identifier to handlers.

/// Authentication middleware and extractor
pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
