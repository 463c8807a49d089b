/**
 * Chatstore Server Entry Point
 *
 * Initializes tracing, loads configuration from the environment,
 * connects to PostgreSQL, and serves the Axum application until
 * shutdown. The database pool is constructed here and injected into
 * the application state; it is closed explicitly once the server
 * future resolves.
 */

use chatstore::server::config::{connect_database, AppConfig};
use chatstore::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "chatstore=debug,info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    let config = AppConfig::from_env()?;

    // Connect at startup; a missing or unreachable database is fatal
    // rather than a silently disabled feature.
    let pool = connect_database(&config.database_url).await?;

    let app = create_app(&config, pool.clone());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a listener the server cannot be signalled; keep it
        // running rather than shutting down at startup.
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
