//! Configuration management for warranty-sync
//!
//! This module handles loading, environment overrides, and validation of the
//! sync configuration. Secrets are usually supplied through `WARRANTY_SYNC_*`
//! environment variables rather than the YAML file.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, SyncError};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "WARRANTY_SYNC_CONFIG";

/// Configuration file used when `WARRANTY_SYNC_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/warranty_sync.yaml";

const ENV_PREFIX: &str = "WARRANTY_SYNC_";

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub sync: SyncConfig,
}

impl Config {
    /// Load configuration from a YAML file, apply environment overrides and validate
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SyncError::config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml_str(&content)?;
        config.apply_env_overrides()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML without overrides or validation
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let sync: SyncConfig = serde_yaml::from_str(content)
            .map_err(|e| SyncError::config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { sync })
    }

    /// Resolve the configuration path from the environment
    pub fn resolve_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Overlay `WARRANTY_SYNC_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup keyed by full variable name
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let sync = &mut self.sync;

        if let Some(v) = var("CMDB_INSTANCE_URL") {
            sync.cmdb.instance_url = v;
        }
        if let Some(v) = var("CMDB_USERNAME") {
            sync.cmdb.username = v;
        }
        if let Some(v) = var("CMDB_PASSWORD") {
            sync.cmdb.password = v;
        }
        if let Some(v) = var("CMDB_TABLE_PATH") {
            sync.cmdb.table_path = v;
        }

        if let Some(v) = var("CISCO_ENABLED") {
            sync.cisco.enabled = parse_bool("CISCO_ENABLED", &v)?;
        }
        if let Some(v) = var("CISCO_CLIENT_ID") {
            sync.cisco.client_id = v;
        }
        if let Some(v) = var("CISCO_CLIENT_SECRET") {
            sync.cisco.client_secret = v;
        }

        if let Some(v) = var("DELL_ENABLED") {
            sync.dell.enabled = parse_bool("DELL_ENABLED", &v)?;
        }
        if let Some(v) = var("DELL_CLIENT_ID") {
            sync.dell.client_id = v;
        }
        if let Some(v) = var("DELL_CLIENT_SECRET") {
            sync.dell.client_secret = v;
        }

        if let Some(v) = var("HTTP_TIMEOUT_SECS") {
            let secs = v.parse().map_err(|e| {
                SyncError::config(format!("Invalid {}HTTP_TIMEOUT_SECS: {}", ENV_PREFIX, e))
            })?;
            sync.http.timeout_secs = Some(secs);
        }
        if let Some(v) = var("LOG_LEVEL") {
            sync.logging.level = v;
        }
        if let Some(v) = var("LOG_JSON") {
            sync.logging.json = parse_bool("LOG_JSON", &v)?;
        }

        Ok(())
    }

    pub fn cmdb(&self) -> &CmdbConfig {
        &self.sync.cmdb
    }

    pub fn cisco(&self) -> &CiscoConfig {
        &self.sync.cisco
    }

    pub fn dell(&self) -> &DellConfig {
        &self.sync.dell
    }

    pub fn http(&self) -> &HttpConfig {
        &self.sync.http
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.sync.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.sync.validate().map_err(SyncError::Config)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SyncError::config(format!(
            "Invalid {}{}: expected a boolean, got '{}'",
            ENV_PREFIX, name, other
        ))),
    }
}
