//! Server Configuration
//!
//! Configuration management for the CoreBank API server.
//! Supports environment variables, config files, and CLI arguments.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use corebank_auth::{ClaimMap, TokenConfig};
use corebank_core::TransferPolicy;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server binding configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Token issuance and validation configuration
    #[serde(default)]
    pub auth: AuthSettings,

    /// Transfer policy configuration
    #[serde(default)]
    pub transfer: TransferSettings,

    /// API configuration
    #[serde(default)]
    pub api: ApiSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed demo users and accounts on startup
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

/// Server binding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}

impl ServerSettings {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {}:{}: {e}", self.host, self.port))
    }

    /// Get the shutdown timeout duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Token settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// HMAC signing key for bearer tokens
    pub token_secret: String,

    /// Token issuer
    #[serde(default = "default_token_issuer")]
    pub token_issuer: String,

    /// Token audience
    #[serde(default = "default_token_audience")]
    pub token_audience: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_secs: i64,

    /// Enforce token expiry during validation.
    ///
    /// Off by default: issued tokens stay valid indefinitely. Production
    /// deployments should enable this and shorten `token_lifetime_secs`.
    #[serde(default)]
    pub validate_token_lifetime: bool,

    /// Which inbound claim carries the subject
    #[serde(default = "default_subject_claim")]
    pub subject_claim: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_secret: "change-me-in-production".to_string(),
            token_issuer: default_token_issuer(),
            token_audience: default_token_audience(),
            token_lifetime_secs: default_token_lifetime(),
            validate_token_lifetime: false,
            subject_claim: default_subject_claim(),
        }
    }
}

impl AuthSettings {
    /// Build the token configuration the auth crate consumes
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig {
            secret: self.token_secret.clone(),
            issuer: self.token_issuer.clone(),
            audience: self.token_audience.clone(),
            expire_seconds: self.token_lifetime_secs,
            validate_lifetime: self.validate_token_lifetime,
            claim_map: ClaimMap {
                subject: self.subject_claim.clone(),
            },
        }
    }
}

/// Transfer policy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferSettings {
    /// Clear the one-time code once a transfer commits, forcing a fresh
    /// code per transfer. Off by default: a code stays valid until the
    /// next generation replaces it.
    #[serde(default)]
    pub rotate_codes: bool,
}

impl TransferSettings {
    pub fn policy(&self) -> TransferPolicy {
        TransferPolicy {
            rotate_codes: self.rotate_codes,
        }
    }
}

/// API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: default_cors_origins(),
            enable_tracing: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// =============================================================================
// Default Functions
// =============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_token_issuer() -> String {
    "corebank".to_string()
}

fn default_token_audience() -> String {
    "corebank-api".to_string()
}

fn default_token_lifetime() -> i64 {
    i64::from(i32::MAX)
}

fn default_subject_claim() -> String {
    "sub".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl ServerConfig {
    /// Load configuration from environment and optional config file
    pub fn load(config_path: Option<&str>) -> anyhow::Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let mut builder = config::Config::builder();

        // Add config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add default config locations
        builder = builder
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        // Add environment variables with COREBANK_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("COREBANK")
                .separator("__")
                .try_parsing(true),
        );

        // Build and deserialize
        let config = builder.build()?;

        // Try to deserialize, falling back to defaults where needed
        let server_config: ServerConfig = config.try_deserialize().unwrap_or_else(|_| {
            tracing::warn!("Using default configuration - some settings may need adjustment");
            ServerConfig::default()
        });

        Ok(server_config)
    }

    /// Create a configuration for development/testing
    pub fn development() -> Self {
        Self {
            server: ServerSettings::default(),
            auth: AuthSettings::default(),
            transfer: TransferSettings::default(),
            api: ApiSettings::default(),
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: "pretty".to_string(),
            },
            seed_demo_data: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::development()
    }
}
