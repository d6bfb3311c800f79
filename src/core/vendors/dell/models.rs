//! Dell API wire models

use crate::core::models::{WarrantyLookupResult, parse_date_prefix};
use crate::utils::error::LookupErrorKind;
use serde::Deserialize;

/// One element of the `asset-entitlements` response
#[derive(Debug, Clone, Deserialize)]
pub struct DellAsset {
    /// Dell's internal asset id; null when the service tag is unknown
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(rename = "serviceTag")]
    pub service_tag: String,
    #[serde(default)]
    pub entitlements: Vec<Entitlement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entitlement {
    #[serde(rename = "endDate", default)]
    pub end_date: String,
}

impl DellAsset {
    /// Dell has no asset on file for this service tag
    pub fn is_unmatched(&self) -> bool {
        self.id.as_ref().is_none_or(serde_json::Value::is_null)
    }

    /// The last entitlement decides the warranty end date
    pub fn to_lookup_result(&self) -> WarrantyLookupResult {
        if self.is_unmatched() {
            return WarrantyLookupResult::failed(&self.service_tag, LookupErrorKind::NoMatch);
        }

        let Some(last) = self.entitlements.last() else {
            return WarrantyLookupResult::warranty(&self.service_tag, false, None);
        };
        match parse_date_prefix(&last.end_date) {
            Some(date) => WarrantyLookupResult::warranty(&self.service_tag, true, Some(date)),
            None => WarrantyLookupResult::failed(
                &self.service_tag,
                LookupErrorKind::MalformedDate(last.end_date.clone()),
            ),
        }
    }
}
