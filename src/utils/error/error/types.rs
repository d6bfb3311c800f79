//! Error type definitions

use thiserror::Error;

/// Result type alias for warranty-sync
pub type Result<T> = std::result::Result<T, SyncError>;

/// Main error type for warranty-sync
#[derive(Error, Debug)]
pub enum SyncError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Neither the serial number nor the asset tag is usable
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A whole vendor batch response was malformed or the call failed
    #[error("Vendor batch error for {vendor}: {message}")]
    VendorBatch {
        vendor: &'static str,
        message: String,
    },

    /// More than one CMDB row matched an update lookup
    #[error("CMDB lookup matched {count} records: {lookup}")]
    CmdbAmbiguous { lookup: String, count: usize },

    /// No CMDB row matched an update lookup
    #[error("CMDB lookup matched no records: {0}")]
    CmdbNotFound(String),

    /// CMDB request failures (non-success status, malformed body)
    #[error("CMDB error: {0}")]
    Cmdb(String),

    /// Token acquisition failures
    #[error("Authentication failed for {service}: {message}")]
    Auth {
        service: &'static str,
        message: String,
    },

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-identifier failure reported by a vendor API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// The vendor answered with an explicit error/not-found marker
    #[error("vendor API error response")]
    ErrorResponse,

    /// The vendor returned no match (null id) for the identifier
    #[error("vendor warranty API error response")]
    NoMatch,

    /// The vendor returned a date we could not parse
    #[error("unparseable vendor date '{0}'")]
    MalformedDate(String),
}
