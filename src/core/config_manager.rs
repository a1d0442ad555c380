// src/core/config_manager.rs
//! Unified configuration management for the server binary

use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub server: ServerConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub max_upload_bytes: u64,
}

/// External AI completion service. `base_url` is optional: without it the
/// analyze endpoint serves the local structure-based fallback only.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
}

impl ConfigManager {
    /// Load all configuration from environment variables, with local
    /// defaults.
    pub fn load() -> Result<Self> {
        let port = match std::env::var("CVLENS_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("CVLENS_PORT must be a valid port number")?,
            Err(_) => 8000,
        };

        let max_upload_mb = match std::env::var("CVLENS_MAX_UPLOAD_MB") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("CVLENS_MAX_UPLOAD_MB must be a number of megabytes")?,
            Err(_) => 10,
        };

        let base_url = std::env::var("AI_SERVICE_URL").ok();
        let model = std::env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        info!("Server port: {}", port);
        info!("Upload ceiling: {} MB", max_upload_mb);
        match &base_url {
            Some(url) => info!("AI service: {}", url),
            None => info!("AI service not configured, analysis uses local fallback"),
        }

        Ok(Self {
            server: ServerConfig {
                port,
                max_upload_bytes: max_upload_mb * 1024 * 1024,
            },
            service: ServiceConfig {
                base_url,
                model,
                timeout_seconds: 120,
            },
        })
    }
}
