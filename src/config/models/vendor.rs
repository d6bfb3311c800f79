//! Vendor API configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Largest batch the Cisco EOX API accepts (the warranty API allows 50)
pub const CISCO_MAX_BATCH_SIZE: usize = 20;

/// Largest batch the Dell warranty API accepts
pub const DELL_MAX_BATCH_SIZE: usize = 100;

/// Cisco Support API (warranty summary + EOX) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CiscoConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_cisco_token_url")]
    pub token_url: String,
    /// Comma-joined serial numbers are appended to this URL
    #[serde(default = "default_cisco_warranty_url")]
    pub warranty_url: String,
    /// Comma-joined serial numbers are appended to this URL
    #[serde(default = "default_cisco_eox_url")]
    pub eox_url: String,
    #[serde(default = "default_cisco_batch_size")]
    pub batch_size: usize,
    /// Manufacturer substrings selecting CMDB rows for this pipeline
    #[serde(default = "default_cisco_manufacturers")]
    pub manufacturers: Vec<String>,
}

impl Default for CiscoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            client_id: String::new(),
            client_secret: String::new(),
            token_url: default_cisco_token_url(),
            warranty_url: default_cisco_warranty_url(),
            eox_url: default_cisco_eox_url(),
            batch_size: default_cisco_batch_size(),
            manufacturers: default_cisco_manufacturers(),
        }
    }
}

/// Dell TechDirect warranty API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DellConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_dell_token_url")]
    pub token_url: String,
    #[serde(default = "default_dell_warranty_url")]
    pub warranty_url: String,
    #[serde(default = "default_dell_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_dell_manufacturers")]
    pub manufacturers: Vec<String>,
    /// Service tags the API reports as unmatched that are expected and
    /// should not invalidate the CMDB record
    #[serde(default = "default_ignored_service_tags")]
    pub ignored_service_tags: Vec<String>,
}

impl Default for DellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            client_id: String::new(),
            client_secret: String::new(),
            token_url: default_dell_token_url(),
            warranty_url: default_dell_warranty_url(),
            batch_size: default_dell_batch_size(),
            manufacturers: default_dell_manufacturers(),
            ignored_service_tags: default_ignored_service_tags(),
        }
    }
}

fn default_cisco_token_url() -> String {
    "https://id.cisco.com/oauth2/default/v1/token".to_string()
}

fn default_cisco_warranty_url() -> String {
    "https://apix.cisco.com/sn2info/v2/coverage/summary/serial_numbers/".to_string()
}

fn default_cisco_eox_url() -> String {
    "https://apix.cisco.com/supporttools/eox/rest/5/EOXBySerialNumber/1/".to_string()
}

fn default_cisco_batch_size() -> usize {
    CISCO_MAX_BATCH_SIZE
}

fn default_cisco_manufacturers() -> Vec<String> {
    vec!["Cisco".to_string(), "Meraki".to_string()]
}

fn default_dell_token_url() -> String {
    "https://apigtwb2c.us.dell.com/auth/oauth/v2/token".to_string()
}

fn default_dell_warranty_url() -> String {
    "https://apigtwb2c.us.dell.com/PROD/sbil/eapi/v5/asset-entitlements".to_string()
}

fn default_dell_batch_size() -> usize {
    DELL_MAX_BATCH_SIZE
}

fn default_dell_manufacturers() -> Vec<String> {
    vec!["Dell".to_string()]
}

fn default_ignored_service_tags() -> Vec<String> {
    vec!["AMALONE".to_string()]
}
