//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables so the same
//! build runs locally and on Lambda.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Request bodies above this size are rejected (artifact payloads are JSON forms)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Postgres connection URL
    pub database_url: String,

    /// Comma-separated list of allowed CORS origins; `*` allows any
    pub cors_allowed_origins: String,

    /// Text of the brand mark on exported documents; unset keeps the
    /// exporter's default
    pub brand_mark: Option<String>,

    /// Maximum accepted request body size
    pub max_body_bytes: usize,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()),
            brand_mark: lookup("BRAND_MARK").filter(|v| !v.trim().is_empty()),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "launchpad=debug".to_string()),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
        };

        Ok(config)
    }
}
