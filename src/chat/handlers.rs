/**
 * Chat HTTP Handlers
 *
 * Handlers for the chat endpoints:
 * - `POST /api/chats` - create a session from an initial message
 * - `GET /api/chats/{id}` - fetch one session the caller owns
 * - `GET /api/userchats` - fetch the caller's chat summaries
 *
 * All three sit behind the auth middleware; the user identifier comes
 * from `AuthUser`, never from the request body.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::chat::types::{ChatSession, ChatSummary};
use crate::chat::{db, workflow};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Request body for POST /api/chats
#[derive(Debug, Deserialize)]
pub struct CreateChatRequest {
    /// Initial message text. Defaults to empty when the field is
    /// missing so the validation boundary produces the 400, not the
    /// JSON extractor.
    #[serde(default)]
    pub text: String,
}

/// Create a chat session
///
/// Validates the body, runs the upsert workflow, and returns the new
/// session id as a plaintext body with status 201.
///
/// # Errors
///
/// * `400 Bad Request` - empty or missing `text`
/// * `401 Unauthorized` - rejected by the auth middleware
/// * `500 Internal Server Error` - storage failure (generic body,
///   detail logged server-side)
pub async fn create_chat(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateChatRequest>,
) -> Result<(StatusCode, String), ApiError> {
    if request.text.is_empty() {
        return Err(ApiError::invalid_input("text", "must not be empty"));
    }

    tracing::info!("Creating chat session for user {}", user.user_id);

    let session_id = workflow::create_chat(&app_state.pool, &user.user_id, &request.text).await?;

    Ok((StatusCode::CREATED, session_id.to_string()))
}

/// Fetch one chat session owned by the caller
///
/// # Errors
///
/// * `404 Not Found` - no such session, or it belongs to another user
pub async fn get_chat(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSession>, ApiError> {
    let session = db::get_session(&app_state.pool, id, &user.user_id).await?;
    session.map(Json).ok_or(ApiError::NotFound)
}

/// Fetch the caller's chat summaries
///
/// Returns the entries of the caller's chat index, or an empty list if
/// the user has not created a chat yet (the index is created lazily on
/// the first chat).
pub async fn get_user_chats(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ChatSummary>>, ApiError> {
    let index = db::find_index_by_owner(&app_state.pool, &user.user_id).await?;
    Ok(Json(index.map(|i| i.chats.0).unwrap_or_default()))
}
