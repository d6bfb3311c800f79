//! Vendor lookup results

use crate::utils::error::LookupErrorKind;
use chrono::NaiveDate;

/// End-of-life information for one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfLife {
    /// The vendor said nothing about this identifier; leave the field alone
    #[default]
    Unreported,
    /// The vendor has a record but no last-date-of-support; clear the field
    NoDate,
    Date(NaiveDate),
}

/// Authoritative warranty state for one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarrantyLookupResult {
    /// Identifier as echoed back by the vendor
    pub identifier: String,
    pub covered: bool,
    pub warranty_end: Option<NaiveDate>,
    pub end_of_life: EndOfLife,
    /// False when only end-of-life data is known; warranty fields are left alone
    pub warranty_reported: bool,
    /// Set when the vendor flagged this identifier as unknown or broken
    pub error: Option<LookupErrorKind>,
}

impl WarrantyLookupResult {
    pub fn warranty(
        identifier: impl Into<String>,
        covered: bool,
        warranty_end: Option<NaiveDate>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            covered,
            warranty_end,
            end_of_life: EndOfLife::Unreported,
            warranty_reported: true,
            error: None,
        }
    }

    /// End-of-life data for an identifier the warranty lookup did not answer for
    pub fn end_of_life_only(identifier: impl Into<String>, end_of_life: EndOfLife) -> Self {
        Self {
            identifier: identifier.into(),
            covered: false,
            warranty_end: None,
            end_of_life,
            warranty_reported: false,
            error: None,
        }
    }

    pub fn failed(identifier: impl Into<String>, kind: LookupErrorKind) -> Self {
        Self {
            identifier: identifier.into(),
            covered: false,
            warranty_end: None,
            end_of_life: EndOfLife::Unreported,
            warranty_reported: true,
            error: Some(kind),
        }
    }

    pub fn with_end_of_life(mut self, end_of_life: EndOfLife) -> Self {
        self.end_of_life = end_of_life;
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
