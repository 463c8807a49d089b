//! Chat Module
//!
//! Chat sessions and the per-user chat index.
//!
//! # Architecture
//!
//! - **`types`** - Document types (`ChatSession`, `UserChatIndex`) and
//!   title derivation
//! - **`db`** - Database operations for both collections
//! - **`workflow`** - The session + index upsert workflow
//! - **`handlers`** - HTTP handlers for the chat endpoints
//!
//! # Data model
//!
//! Two collections, stored as PostgreSQL tables with JSONB document
//! columns:
//!
//! - `chat_sessions` - one row per conversation; `history` holds the
//!   ordered message entries
//! - `user_chat_indices` - at most one row per user (enforced with a
//!   UNIQUE constraint on `owner_id`); `chats` holds insertion-ordered
//!   `{sessionId, title}` summaries, one per session the user owns

/// Document types and title derivation
pub mod types;

/// Database operations
pub mod db;

/// Session + index upsert workflow
pub mod workflow;

/// HTTP handlers
pub mod handlers;

pub use types::{ChatSession, ChatSummary, HistoryEntry, MessagePart, MessageRole, UserChatIndex};
pub use workflow::create_chat;
