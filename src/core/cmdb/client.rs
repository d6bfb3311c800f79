//! CMDB client trait and lookup keys

use crate::core::cmdb::query::CmdbQuery;
use crate::core::models::{AssetRecord, FieldPatch};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Which columns identify the row an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Warranty and end-of-life writes
    NameAndSerial,
    /// Serial number corrections, where the stored serial is unusable
    NameAndAssetTag,
    /// Invalid-data flag writes
    SystemId,
}

/// Column values locating one CMDB row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    NameAndSerial { name: String, serial_number: String },
    NameAndAssetTag { name: String, asset_tag: String },
    SystemId(String),
}

impl LookupKey {
    pub fn for_record(kind: KeyKind, record: &AssetRecord) -> Self {
        match kind {
            KeyKind::NameAndSerial => LookupKey::NameAndSerial {
                name: record.name.clone(),
                serial_number: record.serial_number.clone(),
            },
            KeyKind::NameAndAssetTag => LookupKey::NameAndAssetTag {
                name: record.name.clone(),
                asset_tag: record.asset_tag.clone(),
            },
            KeyKind::SystemId => LookupKey::SystemId(record.sys_id.clone()),
        }
    }

    /// Equality conditions as (column, value) pairs
    pub fn conditions(&self) -> Vec<(&'static str, &str)> {
        match self {
            LookupKey::NameAndSerial {
                name,
                serial_number,
            } => vec![("name", name.as_str()), ("serial_number", serial_number.as_str())],
            LookupKey::NameAndAssetTag { name, asset_tag } => {
                vec![("name", name.as_str()), ("asset_tag", asset_tag.as_str())]
            }
            LookupKey::SystemId(sys_id) => vec![("sys_id", sys_id.as_str())],
        }
    }

    /// Query selecting the rows this key matches
    pub fn to_query(&self) -> CmdbQuery {
        self.conditions()
            .into_iter()
            .fold(CmdbQuery::new(), |query, (field, value)| {
                query.equals(field, value)
            })
    }

    /// Whether `record` is matched by this key
    pub fn matches(&self, record: &AssetRecord) -> bool {
        match self {
            LookupKey::NameAndSerial {
                name,
                serial_number,
            } => record.name == *name && record.serial_number == *serial_number,
            LookupKey::NameAndAssetTag { name, asset_tag } => {
                record.name == *name && record.asset_tag == *asset_tag
            }
            LookupKey::SystemId(sys_id) => record.sys_id == *sys_id,
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .conditions()
            .into_iter()
            .map(|(field, value)| format!("{}='{}'", field, value))
            .collect();
        write!(f, "{}", parts.join(" AND "))
    }
}

/// Read and update access to CMDB hardware records
#[async_trait]
pub trait CmdbClient: Send + Sync {
    /// Fetch every record matching `query`
    async fn fetch_records(&self, query: &CmdbQuery) -> Result<Vec<AssetRecord>>;

    /// Update the single row matched by `key`
    ///
    /// Returns `SyncError::CmdbAmbiguous` when several rows match and
    /// `SyncError::CmdbNotFound` when none do; nothing is written in
    /// either case.
    async fn update_record(&self, key: &LookupKey, patch: &FieldPatch) -> Result<()>;
}
