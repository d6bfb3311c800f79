//! Test fixtures and data factories

use chrono::NaiveDate;
use warranty_sync::AssetRecord;
use warranty_sync::config::{CiscoConfig, CmdbConfig, DellConfig, SyncConfig};
use warranty_sync::Config;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Factory for CMDB hardware records
pub struct AssetFactory;

impl AssetFactory {
    /// Record with a serial number and no warranty data
    pub fn create(sys_id: &str, serial_number: &str) -> AssetRecord {
        AssetRecord::new(sys_id, format!("host-{}", sys_id), serial_number, "")
    }

    /// Record with both identifiers
    pub fn with_tag(sys_id: &str, serial_number: &str, asset_tag: &str) -> AssetRecord {
        AssetRecord::new(sys_id, format!("host-{}", sys_id), serial_number, asset_tag)
    }

    /// `count` records with serials `{prefix}000`, `{prefix}001`, ...
    pub fn many(prefix: &str, count: usize) -> Vec<AssetRecord> {
        (0..count)
            .map(|i| Self::create(&format!("{}-{}", prefix, i), &format!("{}{:03}", prefix, i)))
            .collect()
    }
}

/// Configuration with every endpoint pointed at `base_url`
pub fn config_for(base_url: &str) -> Config {
    Config {
        sync: SyncConfig {
            cmdb: CmdbConfig {
                instance_url: base_url.to_string(),
                username: "svc".to_string(),
                password: "pw".to_string(),
                ..Default::default()
            },
            cisco: CiscoConfig {
                client_id: "cisco-id".to_string(),
                client_secret: "cisco-secret".to_string(),
                token_url: format!("{}/cisco/token", base_url),
                warranty_url: format!("{}/sn2info/coverage/", base_url),
                eox_url: format!("{}/eox/", base_url),
                ..Default::default()
            },
            dell: DellConfig {
                client_id: "dell-id".to_string(),
                client_secret: "dell-secret".to_string(),
                token_url: format!("{}/dell/token", base_url),
                warranty_url: format!("{}/asset-entitlements", base_url),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}
