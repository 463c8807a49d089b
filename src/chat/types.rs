/**
 * Chat Document Types
 *
 * The two persisted documents (`ChatSession`, `UserChatIndex`) and the
 * JSON shapes stored inside their JSONB columns. Wire names use
 * camelCase to match the document format consumers already expect.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// Maximum length, in characters, of a derived chat title
pub const TITLE_MAX_CHARS: usize = 40;

/// Who authored a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Model,
}

/// One content part of a history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePart {
    pub text: String,
}

/// One message in a session's history
///
/// History is append-only in the broader system; the creation workflow
/// only ever writes a single `user` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub parts: Vec<MessagePart>,
}

impl HistoryEntry {
    /// Build a user-authored entry with one text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            parts: vec![MessagePart { text: text.into() }],
        }
    }
}

/// A chat session document
///
/// `id` is generated by the store on insert and immutable afterwards;
/// `owner_id` is set once from the authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatSession {
    /// Store-generated session identifier
    pub id: Uuid,
    /// Identifier of the user who created the session
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    /// Ordered message entries
    pub history: Json<Vec<HistoryEntry>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Summary entry in a user's chat index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    /// The session this entry refers to
    pub session_id: Uuid,
    /// Display title: a straight prefix of the first message
    pub title: String,
}

/// A user's chat index document
///
/// At most one exists per user; `chats` is insertion-ordered with one
/// entry per session the user owns.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserChatIndex {
    /// Store-generated index identifier
    pub id: Uuid,
    /// The user this index belongs to
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    /// Insertion-ordered session summaries
    pub chats: Json<Vec<ChatSummary>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Derive a chat title from the initial message text
///
/// A straight prefix of the first [`TITLE_MAX_CHARS`] characters, no
/// trimming, no word-boundary awareness. Truncation counts characters,
/// not bytes, so multibyte text never splits mid-character.
pub fn derive_title(text: &str) -> String {
    text.chars().take(TITLE_MAX_CHARS).collect()
}
