/**
 * Database Operations for Chat Sessions and User Chat Indices
 *
 * Write operations take `&mut PgConnection` so the workflow can run
 * them inside one transaction; reads take the pool directly.
 *
 * The index append is a server-side `jsonb || jsonb` mutation, never a
 * client-side read-modify-write, so concurrent appends to the same
 * user's index cannot lose updates.
 */

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::chat::types::{ChatSession, ChatSummary, HistoryEntry, UserChatIndex};

/// Insert a new chat session
///
/// # Arguments
/// * `conn` - Database connection (or transaction)
/// * `owner_id` - Authenticated user identifier
/// * `history` - Initial history entries (the workflow passes exactly one)
///
/// # Returns
/// The store-generated session id
pub async fn insert_session(
    conn: &mut PgConnection,
    owner_id: &str,
    history: &[HistoryEntry],
) -> Result<Uuid, sqlx::Error> {
    let row: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO chat_sessions (id, owner_id, history, created_at, updated_at)
        VALUES (gen_random_uuid(), $1, $2, NOW(), NOW())
        RETURNING id
        "#,
    )
    .bind(owner_id)
    .bind(Json(history))
    .fetch_one(conn)
    .await?;

    Ok(row.0)
}

/// Append a summary entry to an existing user chat index
///
/// Single-statement server-side array append; safe under concurrent
/// writers for the same user.
///
/// # Returns
/// Number of rows updated: 1 if the user's index existed, 0 if it
/// does not exist yet (caller takes the create path).
pub async fn append_index_entry(
    conn: &mut PgConnection,
    owner_id: &str,
    entry: &ChatSummary,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE user_chat_indices
        SET chats = chats || $2, updated_at = NOW()
        WHERE owner_id = $1
        "#,
    )
    .bind(owner_id)
    .bind(Json(entry))
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

/// Create a user's chat index with a single summary entry
///
/// `owner_id` is UNIQUE, so a concurrent first create from the same
/// user degrades to an append instead of failing.
pub async fn create_index(
    conn: &mut PgConnection,
    owner_id: &str,
    entry: &ChatSummary,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_chat_indices (id, owner_id, chats, created_at, updated_at)
        VALUES (gen_random_uuid(), $1, $2, NOW(), NOW())
        ON CONFLICT (owner_id) DO UPDATE
        SET chats = user_chat_indices.chats || EXCLUDED.chats, updated_at = NOW()
        "#,
    )
    .bind(owner_id)
    .bind(Json(std::slice::from_ref(entry)))
    .execute(conn)
    .await?;

    Ok(())
}

/// Get a session by id, scoped to its owner
///
/// The owner filter is part of the query so a session belonging to
/// another user is indistinguishable from a missing one.
///
/// # Returns
/// The session, or None if absent or owned by someone else
pub async fn get_session(
    pool: &PgPool,
    id: Uuid,
    owner_id: &str,
) -> Result<Option<ChatSession>, sqlx::Error> {
    sqlx::query_as::<_, ChatSession>(
        r#"
        SELECT id, owner_id, history, created_at, updated_at
        FROM chat_sessions
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Find a user's chat index
///
/// # Returns
/// The index document, or None if the user has no chats yet
pub async fn find_index_by_owner(
    pool: &PgPool,
    owner_id: &str,
) -> Result<Option<UserChatIndex>, sqlx::Error> {
    sqlx::query_as::<_, UserChatIndex>(
        r#"
        SELECT id, owner_id, chats, created_at, updated_at
        FROM user_chat_indices
        WHERE owner_id = $1
        "#,
    )
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}
