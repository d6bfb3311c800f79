//! Core data models for warranty-sync
//!
//! CMDB asset records, normalized identifiers, field patches and the
//! per-identifier results reported by vendor warranty APIs.

pub mod asset;
pub mod identifier;
pub mod lookup;
pub mod patch;
pub mod vendor;

pub use asset::*;
pub use identifier::*;
pub use lookup::*;
pub use patch::*;
pub use vendor::*;

use chrono::NaiveDate;

/// Date format used by the CMDB and by vendor date prefixes
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the leading `YYYY-MM-DD` portion of a date or timestamp string
///
/// Returns `None` for empty input, input shorter than ten characters and
/// anything that is not a calendar date.
pub fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    let prefix = value.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()
}

/// Render a date the way the CMDB stores it
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
