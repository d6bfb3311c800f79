//! Vendor families handled by the sync

use serde::Serialize;
use std::fmt;

/// Hardware vendor family a pipeline reconciles against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorFamily {
    /// Network equipment, keyed by serial number (Cisco and Meraki)
    Cisco,
    /// Server hardware, keyed by service tag (Dell)
    Dell,
}

impl VendorFamily {
    /// Lower-case name used in error values and structured logs
    pub fn key(&self) -> &'static str {
        match self {
            VendorFamily::Cisco => "cisco",
            VendorFamily::Dell => "dell",
        }
    }
}

impl fmt::Display for VendorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorFamily::Cisco => write!(f, "Cisco"),
            VendorFamily::Dell => write!(f, "Dell"),
        }
    }
}
