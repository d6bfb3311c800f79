//! Top-level sync configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything a sync run needs, as read from the YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub cmdb: CmdbConfig,
    #[serde(default)]
    pub cisco: CiscoConfig,
    #[serde(default)]
    pub dell: DellConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
