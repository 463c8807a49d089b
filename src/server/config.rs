/**
 * Server Configuration
 *
 * Loads configuration from environment variables into an explicit
 * `AppConfig`, and owns database pool construction. Required values
 * that are missing are startup errors, not silently disabled features.
 *
 * # Recognized variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SERVER_PORT` - listen port (default 3000)
 * - `CLIENT_URL` - allowed CORS origin (optional; no CORS layer if unset)
 * - `JWT_SECRET` - bearer token verification secret (required)
 * - `IK_ENDPOINT` / `IK_PUBLIC_KEY` / `IK_SECRET_KEY` - media service
 *   credentials for upload signing (required)
 */

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

const DEFAULT_SERVER_PORT: u16 = 3000;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {message}")]
    InvalidVar {
        name: &'static str,
        message: String,
    },
}

/// Media service credentials for upload signing
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub url_endpoint: String,
    pub public_key: String,
    pub private_key: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Port the server listens on
    pub server_port: u16,
    /// Allowed CORS origin; no CORS layer is installed when unset
    pub client_url: Option<String>,
    /// Bearer token verification secret
    pub jwt_secret: String,
    /// Media service credentials
    pub upload: UploadConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: "SERVER_PORT",
                message: e.to_string(),
            })?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let client_url = std::env::var("CLIENT_URL").ok();
        if client_url.is_none() {
            tracing::warn!("CLIENT_URL not set; CORS layer disabled");
        }

        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            server_port,
            client_url,
            jwt_secret: require_var("JWT_SECRET")?,
            upload: UploadConfig {
                url_endpoint: require_var("IK_ENDPOINT")?,
                public_key: require_var("IK_PUBLIC_KEY")?,
                private_key: require_var("IK_SECRET_KEY")?,
            },
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Connect the database pool and run migrations
///
/// Called once at startup. Failure here is fatal: the store is a hard
/// dependency of every workflow.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new().connect(database_url).await?;

    tracing::info!("Database connection pool created, running migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}
