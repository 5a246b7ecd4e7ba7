//! CoreBank API Server
//!
//! REST API server for the CoreBank backend. Serves the login flow,
//! owner-scoped account reads, money transfers and one-time transaction
//! codes over an in-memory store.
//!
//! # Features
//!
//! - JWT bearer authentication with a configurable subject claim
//! - Owner-scoped account access (foreign accounts are indistinguishable
//!   from missing ones)
//! - OpenAPI documentation with Swagger UI
//! - Graceful shutdown handling
//! - Health check endpoint
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (seeds demo users)
//! corebank-server --dev-mode
//!
//! # Start with custom config
//! corebank-server --config /path/to/config.toml
//!
//! # Start with environment overrides
//! COREBANK__SERVER__PORT=8080 corebank-server
//! ```

mod config;
mod seed;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use corebank_api::{create_router, ApiConfig, AppState};
use corebank_auth::TokenService;
use corebank_store::MemoryStore;

use crate::config::ServerConfig;

// =============================================================================
// CLI Arguments
// =============================================================================

/// CoreBank API Server - owner-scoped banking backend
#[derive(Parser, Debug)]
#[command(name = "corebank-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML, JSON, or YAML)
    #[arg(short, long, env = "COREBANK_CONFIG")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "COREBANK_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "COREBANK_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "COREBANK_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format (json, pretty)
    #[arg(long, env = "COREBANK_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// Token signing secret
    #[arg(long, env = "TOKEN_SECRET")]
    token_secret: Option<String>,

    /// Enable development mode (relaxed security, demo data)
    #[arg(long, env = "COREBANK_DEV_MODE")]
    dev_mode: bool,
}

// =============================================================================
// Main Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut server_config = ServerConfig::load(args.config.as_deref())?;

    // Override with CLI arguments
    if let Some(host) = args.host {
        server_config.server.host = host;
    }
    if let Some(port) = args.port {
        server_config.server.port = port;
    }
    if let Some(token_secret) = args.token_secret {
        server_config.auth.token_secret = token_secret;
    }
    server_config.logging.level = args.log_level;
    server_config.logging.format = args.log_format;

    // Initialize logging
    init_logging(&server_config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting CoreBank API Server"
    );

    // Validate configuration
    validate_config(&server_config, args.dev_mode)?;

    // Initialize the store
    let store = Arc::new(MemoryStore::new());

    if server_config.seed_demo_data {
        seed::seed_demo_data(&store).await?;
    }

    // Initialize the token service
    let token_config = server_config.auth.token_config();
    if let Err(errors) = token_config.validate() {
        anyhow::bail!("invalid token configuration: {}", errors.join("; "));
    }
    let tokens = Arc::new(TokenService::new(token_config));

    // Create application state
    let state = Arc::new(AppState::new(
        tokens,
        store.clone(),
        store.clone(),
        store.clone(),
        server_config.transfer.policy(),
    ));

    // Create API configuration
    let api_config = ApiConfig {
        enable_cors: server_config.api.enable_cors,
        cors_origins: server_config.api.cors_origins.clone(),
        enable_tracing: server_config.api.enable_tracing,
    };

    // Create router
    let app = create_router(state, api_config);

    // Get bind address
    let addr = server_config.server.socket_addr()?;

    tracing::info!(
        host = %server_config.server.host,
        port = %server_config.server.port,
        "Server listening"
    );

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.server.shutdown_timeout()))
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

// =============================================================================
// Initialization Functions
// =============================================================================

/// Initialize tracing/logging
fn init_logging(config: &config::LoggingConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber
                .with(fmt::layer().json().with_target(true))
                .init();
        }
        _ => {
            subscriber
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    Ok(())
}

/// Validate configuration
fn validate_config(config: &ServerConfig, dev_mode: bool) -> anyhow::Result<()> {
    // Check the token secret in production
    if !dev_mode && config.auth.token_secret == "change-me-in-production" {
        anyhow::bail!(
            "Token secret must be changed in production. Set TOKEN_SECRET environment variable."
        );
    }

    // Tokens that never expire are a deliberate compatibility default;
    // warn loudly outside dev mode.
    if !dev_mode && !config.auth.validate_token_lifetime {
        tracing::warn!(
            "Token lifetime validation is disabled; issued tokens never expire. \
             Set COREBANK__AUTH__VALIDATE_TOKEN_LIFETIME=true for production."
        );
    }

    Ok(())
}

// =============================================================================
// Graceful Shutdown
// =============================================================================

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    // Allow time for in-flight requests to complete
    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "Waiting for in-flight requests to complete..."
    );

    tokio::time::sleep(timeout).await;
}

// =============================================================================
// Tests
// =============================================================================
