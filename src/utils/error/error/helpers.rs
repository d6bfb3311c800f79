//! Helper functions for creating specific error types

use super::types::SyncError;

/// Helper functions for creating specific errors
impl SyncError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_identifier<S: Into<String>>(message: S) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    pub fn auth<S: Into<String>>(service: &'static str, message: S) -> Self {
        Self::Auth {
            service,
            message: message.into(),
        }
    }

    pub fn vendor_batch<S: Into<String>>(vendor: &'static str, message: S) -> Self {
        Self::VendorBatch {
            vendor,
            message: message.into(),
        }
    }

    pub fn cmdb<S: Into<String>>(message: S) -> Self {
        Self::Cmdb(message.into())
    }

    /// Whether this error must abort the vendor pipeline it occurred in
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SyncError::Auth { .. } | SyncError::Config(_) | SyncError::Io(_) | SyncError::Yaml(_)
        )
    }
}
