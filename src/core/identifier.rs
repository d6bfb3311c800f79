//! Identifier normalization
//!
//! Serial numbers and service tags are typed into the CMDB by hand, so they
//! arrive with stray whitespace, full-width characters and the occasional
//! `SN1/SN2` pair. Normalization applies NFKD, strips every whitespace
//! character and then applies the vendor's validity rules. When the serial
//! number is unusable the asset tag is tried instead.

use crate::core::models::{NormalizedIdentifier, VendorFamily};
use crate::utils::error::{Result, SyncError};
use std::ops::RangeInclusive;
use unicode_normalization::UnicodeNormalization;

/// Reason attached to records with neither a usable serial nor asset tag
pub const NO_USABLE_IDENTIFIER: &str = "no usable identifier";

/// Validity rules for one vendor family's identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRules {
    /// Allowed length in characters, if the vendor restricts it
    pub length: Option<RangeInclusive<usize>>,
}

impl IdentifierRules {
    /// Network equipment serial numbers: any length
    pub const SERIAL_NUMBER: IdentifierRules = IdentifierRules { length: None };

    /// Server hardware service tags: 5 to 7 characters
    pub const SERVICE_TAG: IdentifierRules = IdentifierRules {
        length: Some(5..=7),
    };

    pub fn for_family(family: VendorFamily) -> Self {
        match family {
            VendorFamily::Cisco => Self::SERIAL_NUMBER,
            VendorFamily::Dell => Self::SERVICE_TAG,
        }
    }

    fn accepts(&self, candidate: &str) -> bool {
        if candidate.is_empty() || candidate.contains(['/', '\\']) {
            return false;
        }
        match &self.length {
            Some(range) => range.contains(&candidate.chars().count()),
            None => true,
        }
    }
}

/// Which input produced the normalized identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierSource {
    SerialNumber,
    /// The serial number was unusable and the asset tag was used instead
    AssetTag,
}

/// Successful normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub identifier: NormalizedIdentifier,
    pub source: IdentifierSource,
}

impl Normalized {
    /// Whether the CMDB serial number must be corrected to this identifier
    pub fn needs_correction(&self) -> bool {
        self.source == IdentifierSource::AssetTag
    }
}

/// Apply NFKD and drop all whitespace
pub fn clean(raw: &str) -> String {
    raw.nfkd().filter(|c| !c.is_whitespace()).collect()
}

/// Normalize `raw`, falling back to `fallback` when `raw` is unusable
pub fn normalize(raw: &str, fallback: &str, rules: &IdentifierRules) -> Result<Normalized> {
    let primary = clean(raw);
    if rules.accepts(&primary) {
        return Ok(Normalized {
            identifier: NormalizedIdentifier::new(primary),
            source: IdentifierSource::SerialNumber,
        });
    }

    let secondary = clean(fallback);
    if rules.accepts(&secondary) {
        return Ok(Normalized {
            identifier: NormalizedIdentifier::new(secondary),
            source: IdentifierSource::AssetTag,
        });
    }

    Err(SyncError::invalid_identifier(NO_USABLE_IDENTIFIER))
}
