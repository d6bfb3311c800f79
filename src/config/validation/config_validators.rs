//! Section validators
//!
//! Vendor sections are only checked when the vendor pipeline is enabled, so
//! a deployment that syncs a single vendor does not need the other's secrets.

use super::trait_def::Validate;
use crate::config::models::*;
use crate::utils::net::ClientUtils;
use tracing::debug;

impl Validate for SyncConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating sync configuration");

        if !self.cisco.enabled && !self.dell.enabled {
            return Err("At least one vendor pipeline must be enabled".to_string());
        }

        self.cmdb.validate()?;
        self.cisco.validate()?;
        self.dell.validate()?;
        self.http.validate()?;
        self.logging.validate()?;

        debug!("Sync configuration validation completed");
        Ok(())
    }
}

impl Validate for CmdbConfig {
    fn validate(&self) -> Result<(), String> {
        if self.instance_url.is_empty() {
            return Err("CMDB instance_url cannot be empty".to_string());
        }
        ClientUtils::validate_url(&self.instance_url)
            .map_err(|e| format!("CMDB instance_url: {}", e))?;

        if self.username.is_empty() || self.password.is_empty() {
            return Err("CMDB username and password are required".to_string());
        }

        if !self.table_path.starts_with("/table/") {
            return Err(format!(
                "CMDB table_path must start with /table/, got: {}",
                self.table_path
            ));
        }

        if self.page_size == 0 {
            return Err("CMDB page_size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for CiscoConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        require_credentials("cisco", &self.client_id, &self.client_secret)?;
        for (name, url) in [
            ("token_url", &self.token_url),
            ("warranty_url", &self.warranty_url),
            ("eox_url", &self.eox_url),
        ] {
            ClientUtils::validate_url(url).map_err(|e| format!("cisco {}: {}", name, e))?;
        }

        validate_batch_size("cisco", self.batch_size, CISCO_MAX_BATCH_SIZE)?;
        validate_manufacturers("cisco", &self.manufacturers)
    }
}

impl Validate for DellConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        require_credentials("dell", &self.client_id, &self.client_secret)?;
        for (name, url) in [
            ("token_url", &self.token_url),
            ("warranty_url", &self.warranty_url),
        ] {
            ClientUtils::validate_url(url).map_err(|e| format!("dell {}: {}", name, e))?;
        }

        validate_batch_size("dell", self.batch_size, DELL_MAX_BATCH_SIZE)?;
        validate_manufacturers("dell", &self.manufacturers)?;

        if let Some(tag) = self
            .ignored_service_tags
            .iter()
            .find(|tag| tag.is_empty() || tag.contains(char::is_whitespace))
        {
            return Err(format!(
                "dell ignored_service_tags entries must be non-empty without whitespace, got: '{}'",
                tag
            ));
        }
        Ok(())
    }
}

impl Validate for HttpConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == Some(0) {
            return Err("http timeout_secs must be greater than 0 when set".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("http user_agent cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("logging level cannot be empty".to_string());
        }
        Ok(())
    }
}

fn require_credentials(vendor: &str, client_id: &str, client_secret: &str) -> Result<(), String> {
    if client_id.is_empty() || client_secret.is_empty() {
        return Err(format!(
            "{} client_id and client_secret are required when enabled",
            vendor
        ));
    }
    Ok(())
}

fn validate_batch_size(vendor: &str, batch_size: usize, ceiling: usize) -> Result<(), String> {
    if batch_size == 0 || batch_size > ceiling {
        return Err(format!(
            "{} batch_size must be between 1 and {}, got: {}",
            vendor, ceiling, batch_size
        ));
    }
    Ok(())
}

fn validate_manufacturers(vendor: &str, manufacturers: &[String]) -> Result<(), String> {
    if manufacturers.iter().all(|m| m.trim().is_empty()) {
        return Err(format!("{} manufacturers cannot be empty", vendor));
    }
    Ok(())
}
