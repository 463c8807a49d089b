//! API Error Module
//!
//! This module defines the error types used by HTTP handlers and the
//! chat workflow, and their conversion to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and status code mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Client-visible behavior
//!
//! Errors never reveal internal detail to the client. Responses carry a
//! status code and a short fixed plaintext body; the underlying error
//! (database failure, signing failure) is logged server-side only.

/// Error type definitions
pub mod types;

/// Error conversion implementations (IntoResponse)
pub mod conversion;

pub use types::ApiError;
