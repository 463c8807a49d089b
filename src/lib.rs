//! Chatstore - Chat Session Backend
//!
//! A minimal backend for a chat application. It authenticates users via
//! bearer tokens, persists chat sessions and per-user chat indices to
//! PostgreSQL, and issues short-lived signed upload credentials for a
//! media service.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration loading, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Bearer token creation and verification
//! - **`middleware`** - Authentication middleware and the `AuthUser` extractor
//! - **`chat`** - Chat session types, database operations, the
//!   session + index upsert workflow, and HTTP handlers
//! - **`upload`** - Signed upload credential issuer
//! - **`error`** - API error types and HTTP response conversion
//!
//! # The upsert workflow
//!
//! The one workflow with real structure is chat creation
//! ([`chat::workflow::create_chat`]): persist a new session document,
//! then create or atomically append to the owner's chat index, inside a
//! single transaction. See the module documentation for the exact
//! contract.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Bearer token handling
pub mod auth;

/// Request middleware
pub mod middleware;

/// Chat sessions and the per-user chat index
pub mod chat;

/// Upload credential issuance
pub mod upload;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::config::AppConfig;
pub use server::state::AppState;
