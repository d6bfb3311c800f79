//! Cisco API wire models

use crate::core::models::{EndOfLife, WarrantyLookupResult, parse_date_prefix};
use crate::utils::error::{LookupErrorKind, Result, SyncError};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// `GET /sn2info/v2/coverage/summary/serial_numbers/{ids}`
#[derive(Debug, Clone, Deserialize)]
pub struct CoverageSummaryResponse {
    pub serial_numbers: Vec<CoverageSummary>,
}

/// Coverage for one serial number, or an error marker
#[derive(Debug, Clone, Deserialize)]
pub struct CoverageSummary {
    pub sr_no: String,
    #[serde(default)]
    pub warranty_end_date: String,
    #[serde(default)]
    pub is_covered: String,
    #[serde(rename = "ErrorResponse", default)]
    pub error_response: Option<serde_json::Value>,
}

impl CoverageSummary {
    pub fn is_covered(&self) -> bool {
        self.is_covered == "YES"
    }

    pub fn to_lookup_result(&self) -> WarrantyLookupResult {
        if self.error_response.is_some() {
            return WarrantyLookupResult::failed(&self.sr_no, LookupErrorKind::ErrorResponse);
        }

        let end_date = self.warranty_end_date.trim();
        if end_date.is_empty() {
            return WarrantyLookupResult::warranty(&self.sr_no, self.is_covered(), None);
        }
        match parse_date_prefix(end_date) {
            Some(date) => WarrantyLookupResult::warranty(&self.sr_no, self.is_covered(), Some(date)),
            None => WarrantyLookupResult::failed(
                &self.sr_no,
                LookupErrorKind::MalformedDate(end_date.to_string()),
            ),
        }
    }
}

/// `GET /supporttools/eox/rest/5/EOXBySerialNumber/1/{ids}`
#[derive(Debug, Clone, Deserialize)]
pub struct EoxResponse {
    #[serde(rename = "EOXRecord", default)]
    pub records: Option<Vec<EoxRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EoxRecord {
    /// Comma-separated serial numbers this record answers for
    #[serde(rename = "EOXInputValue", default)]
    pub input_value: String,
    #[serde(rename = "LastDateOfSupport", default)]
    pub last_date_of_support: EoxDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EoxDate {
    #[serde(default)]
    pub value: String,
}

impl EoxRecord {
    pub fn serial_numbers(&self) -> impl Iterator<Item = &str> {
        self.input_value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn end_of_life(&self) -> EndOfLife {
        let value = self.last_date_of_support.value.trim();
        if value.is_empty() {
            return EndOfLife::NoDate;
        }
        match parse_date_prefix(value) {
            Some(date) => EndOfLife::Date(date),
            None => {
                warn!("Ignoring unparseable last date of support '{}'", value);
                EndOfLife::Unreported
            }
        }
    }
}

impl EoxResponse {
    /// End-of-life per serial number; a response without records is malformed
    pub fn end_of_life_by_serial(&self) -> Result<HashMap<String, EndOfLife>> {
        let records = self
            .records
            .as_ref()
            .ok_or_else(|| SyncError::vendor_batch("cisco", "Invalid EOXRecord found"))?;

        let mut map = HashMap::new();
        for record in records {
            let end_of_life = record.end_of_life();
            for serial in record.serial_numbers() {
                map.insert(serial.to_string(), end_of_life);
            }
        }
        Ok(map)
    }
}
