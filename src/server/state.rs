/**
 * Application State
 *
 * `AppState` is the central state container, built once at startup
 * from `AppConfig` and an already-connected pool. `FromRef`
 * implementations let handlers extract just the part they use.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AppConfig;
use crate::upload::signer::UploadSigner;

/// Shared application state
///
/// Everything here is cheaply cloneable; the pool is internally
/// reference-counted and the signer holds only its credentials.
#[derive(Clone)]
pub struct AppState {
    /// Database handle, injected at startup
    pub pool: PgPool,
    /// Bearer token verification secret
    pub jwt_secret: String,
    /// Upload credential signer
    pub signer: UploadSigner,
}

impl AppState {
    /// Build the state from configuration and a connected pool
    pub fn new(config: &AppConfig, pool: PgPool) -> Self {
        Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            signer: UploadSigner::new(
                config.upload.url_endpoint.clone(),
                config.upload.public_key.clone(),
                config.upload.private_key.clone(),
            ),
        }
    }
}

/// Allow handlers to extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow the upload handler to extract the signer directly
impl FromRef<AppState> for UploadSigner {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.signer.clone()
    }
}
