//! CMDB (ServiceNow) connection configuration

use super::*;
use serde::{Deserialize, Serialize};

/// ServiceNow connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmdbConfig {
    /// Instance base URL, e.g. `https://acme.service-now.com`
    #[serde(default)]
    pub instance_url: String,
    /// Basic-auth user
    #[serde(default)]
    pub username: String,
    /// Basic-auth password
    #[serde(default)]
    pub password: String,
    /// Table API path below `/api/now`
    #[serde(default = "default_table_path")]
    pub table_path: String,
    /// Records requested per page when fetching
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for CmdbConfig {
    fn default() -> Self {
        Self {
            instance_url: String::new(),
            username: String::new(),
            password: String::new(),
            table_path: default_table_path(),
            page_size: default_page_size(),
        }
    }
}
