//! Configuration management for the balance gateway.
//!
//! Loads settings from environment variables and config files.

use crate::credentials::SubaccountEntry;
use crate::exchange::{DEMO_BASE_URL, MAINNET_BASE_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server bind settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Bybit client settings
    #[serde(default)]
    pub bybit: BybitConfig,
    /// Stored subaccount credentials
    #[serde(default)]
    pub subaccounts: Vec<SubaccountEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BybitConfig {
    /// Optional forward proxy for outbound exchange calls (used to work
    /// around IP allow-listing). Read once at startup and injected into
    /// the client at construction.
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// Outbound request timeout. Kept short: the exchange rejects stale
    /// signature timestamps, so a slow response is useless anyway.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Production API host (overridable for tests)
    #[serde(default = "default_mainnet_url")]
    pub mainnet_url: String,
    /// Demo (paper-trading) API host
    #[serde(default = "default_demo_url")]
    pub demo_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_mainnet_url() -> String {
    MAINNET_BASE_URL.to_string()
}

fn default_demo_url() -> String {
    DEMO_BASE_URL.to_string()
}

impl Config {
    /// Load configuration from environment variables and config files.
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Load configuration with an explicit file base name.
    pub fn load_from(file: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::default().separator("__").prefix("BBG"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.subaccounts {
            anyhow::ensure!(!entry.id.trim().is_empty(), "subaccount id must not be empty");
            anyhow::ensure!(
                seen.insert(entry.id.as_str()),
                "duplicate subaccount id: {}",
                entry.id
            );
            anyhow::ensure!(
                !entry.api_key.is_empty() && !entry.secret_key.is_empty(),
                "subaccount {} is missing an API key or secret",
                entry.id
            );
        }

        anyhow::ensure!(self.bybit.timeout_secs > 0, "timeout_secs must be > 0");

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            bybit: BybitConfig::default(),
            subaccounts: Vec::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BybitConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            timeout_secs: default_timeout_secs(),
            mainnet_url: default_mainnet_url(),
            demo_url: default_demo_url(),
        }
    }
}
