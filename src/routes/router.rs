/**
 * Router Configuration
 *
 * Assembles the HTTP surface:
 *
 * - `POST /api/chats` - create a chat session (auth)
 * - `GET /api/chats/{id}` - fetch one session (auth)
 * - `GET /api/userchats` - fetch the caller's chat summaries (auth)
 * - `GET /api/upload` - signed upload credentials (public)
 *
 * Protected routes sit behind the auth middleware; everything else
 * falls through to a plain 404.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::chat::handlers::{create_chat, get_chat, get_user_chats};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::upload::handlers::get_upload_credentials;

/// Create the router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = Router::new()
        .route("/api/chats", post(create_chat))
        .route("/api/chats/{id}", get(get_chat))
        .route("/api/userchats", get(get_user_chats))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    Router::new()
        .merge(protected)
        .route("/api/upload", get(get_upload_credentials))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}
