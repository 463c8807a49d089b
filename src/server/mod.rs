//! Server Module
//!
//! Configuration loading, application state, and app creation.
//!
//! # Initialization flow
//!
//! 1. `AppConfig::from_env()` - read and validate configuration
//! 2. `connect_database()` - connect the pool and run migrations
//! 3. `create_app()` - build state, router, and middleware layers
//!
//! The database handle is constructed explicitly at startup and passed
//! into the state; there is no module-level connection singleton.

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// App creation
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
