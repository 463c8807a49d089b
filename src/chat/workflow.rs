/**
 * Chat Session + Index Upsert Workflow
 *
 * Given an authenticated user identifier and a non-empty initial
 * message, persist a new chat session and reconcile the owner's chat
 * index, returning the new session's id.
 *
 * # Contract
 *
 * 1. Insert the session with a single-entry history
 *    `[{ role: "user", parts: [{ text }] }]`.
 * 2. Append `{ sessionId, title }` to the owner's index, where title
 *    is the first 40 characters of the text. If the user has no index
 *    yet, create one containing that single entry.
 *
 * Step 2 only starts after step 1's insert is acknowledged, so an
 * index entry can never reference a session the store has not seen.
 *
 * # Atomicity
 *
 * Both steps run in one transaction. On any storage failure nothing is
 * persisted and the caller gets `StorageWriteFailed`: a session without
 * an index entry (or the reverse) cannot be left behind.
 *
 * # Concurrency
 *
 * The index row is hot shared state for a user issuing concurrent
 * creates. Both the append and the create-path conflict clause mutate
 * the array server-side in a single statement, so N concurrent
 * invocations yield N sessions and exactly N index entries in one
 * index document.
 */

use sqlx::PgPool;
use uuid::Uuid;

use crate::chat::db;
use crate::chat::types::{derive_title, ChatSummary, HistoryEntry};
use crate::error::ApiError;

/// Create a chat session and reconcile the owner's chat index
///
/// # Arguments
/// * `pool` - Database handle (injected, no global state)
/// * `owner_id` - Authenticated user identifier, never from the body
/// * `text` - Non-empty initial message (validated at the route boundary)
///
/// # Returns
/// The new session's store-generated id
pub async fn create_chat(pool: &PgPool, owner_id: &str, text: &str) -> Result<Uuid, ApiError> {
    let mut tx = pool.begin().await?;

    // Step 1: create the session with exactly one history entry.
    let history = [HistoryEntry::user(text)];
    let session_id = db::insert_session(&mut tx, owner_id, &history).await?;

    // Step 2: reconcile the index. Append first; 0 rows means this is
    // the user's first chat and the index must be created.
    let entry = ChatSummary {
        session_id,
        title: derive_title(text),
    };

    let appended = db::append_index_entry(&mut tx, owner_id, &entry).await?;
    if appended == 0 {
        db::create_index(&mut tx, owner_id, &entry).await?;
    }

    tx.commit().await?;

    tracing::debug!(
        "Created chat session {} for user {} ({} index path)",
        session_id,
        owner_id,
        if appended == 0 { "create" } else { "append" }
    );

    Ok(session_id)
}
