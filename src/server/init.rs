/**
 * App Creation
 *
 * Builds the Axum application: state from configuration plus the
 * injected pool, the router, and the CORS layer when a client origin
 * is configured.
 */

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create the Axum application
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `pool` - Connected database pool (owned by the caller, which also
///   closes it on shutdown)
pub fn create_app(config: &AppConfig, pool: PgPool) -> Router<()> {
    let app_state = AppState::new(config, pool);
    let mut app = create_router(app_state);

    if let Some(layer) = cors_layer(config) {
        app = app.layer(layer);
    }

    app
}

/// CORS layer for the configured client origin
///
/// The client sends credentialed requests, so the origin must be
/// exact; a wildcard is not usable here.
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let client_url = config.client_url.as_deref()?;

    let origin = match client_url.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(e) => {
            tracing::error!("CLIENT_URL is not a valid origin ({}); CORS layer disabled", e);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::UploadConfig;

    fn test_config(client_url: Option<&str>) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/chatstore".to_string(),
            server_port: 3000,
            client_url: client_url.map(|s| s.to_string()),
            jwt_secret: "secret".to_string(),
            upload: UploadConfig {
                url_endpoint: "https://ik.example.com/demo".to_string(),
                public_key: "public".to_string(),
                private_key: "private".to_string(),
            },
        }
    }

    #[test]
    fn test_cors_layer_absent_without_client_url() {
        assert!(cors_layer(&test_config(None)).is_none());
    }

    #[test]
    fn test_cors_layer_present_with_client_url() {
        assert!(cors_layer(&test_config(Some("http://localhost:5173"))).is_some());
    }

    #[test]
    fn test_cors_layer_rejects_unparsable_origin() {
        assert!(cors_layer(&test_config(Some("not an\norigin"))).is_none());
    }
}
