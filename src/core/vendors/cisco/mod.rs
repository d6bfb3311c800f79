//! Cisco Support APIs (warranty summary and EOX)

mod client;
mod models;
mod source;

pub use client::{CiscoApi, CiscoClient};
pub use models::{CoverageSummary, CoverageSummaryResponse, EoxDate, EoxRecord, EoxResponse};
pub use source::CiscoWarrantySource;
