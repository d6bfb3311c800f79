//! CMDB asset records

use super::patch::{CmdbField, FieldPatch, FieldValue};
use super::{format_date, parse_date_prefix};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A date column as stored in the CMDB
///
/// Hand-edited rows can hold text that is not a date. That text is kept so
/// it compares unequal to every vendor answer and gets overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StoredDate {
    #[default]
    Empty,
    Date(NaiveDate),
    Unparsed(String),
}

impl StoredDate {
    /// Read a raw column value; only the leading `YYYY-MM-DD` is considered
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return StoredDate::Empty;
        }
        match parse_date_prefix(trimmed) {
            Some(date) => StoredDate::Date(date),
            None => StoredDate::Unparsed(raw.to_string()),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            StoredDate::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StoredDate::Empty)
    }

    /// Whether the column already holds `wanted`
    pub fn holds(&self, wanted: Option<NaiveDate>) -> bool {
        match (self, wanted) {
            (StoredDate::Empty, None) => true,
            (StoredDate::Date(stored), Some(wanted)) => *stored == wanted,
            _ => false,
        }
    }

    pub fn to_wire(&self) -> String {
        match self {
            StoredDate::Empty => String::new(),
            StoredDate::Date(date) => format_date(date),
            StoredDate::Unparsed(raw) => raw.clone(),
        }
    }
}

impl From<Option<NaiveDate>> for StoredDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(StoredDate::Empty, StoredDate::Date)
    }
}

impl From<NaiveDate> for StoredDate {
    fn from(date: NaiveDate) -> Self {
        StoredDate::Date(date)
    }
}

impl PartialEq<Option<NaiveDate>> for StoredDate {
    fn eq(&self, other: &Option<NaiveDate>) -> bool {
        self.holds(*other)
    }
}

impl Serialize for StoredDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

/// A hardware configuration item as read from the CMDB
///
/// Flags are tri-state: `None` means the CMDB field is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetRecord {
    /// CMDB system identifier
    pub sys_id: String,
    /// Host name
    pub name: String,
    /// Serial number as stored in the CMDB (unnormalized)
    pub serial_number: String,
    /// Asset tag, used as fallback identifier
    pub asset_tag: String,
    pub active_support_contract: Option<bool>,
    pub warranty_expiration: StoredDate,
    pub end_of_life: StoredDate,
    pub valid_warranty_data: Option<bool>,
}

impl AssetRecord {
    pub fn new(
        sys_id: impl Into<String>,
        name: impl Into<String>,
        serial_number: impl Into<String>,
        asset_tag: impl Into<String>,
    ) -> Self {
        Self {
            sys_id: sys_id.into(),
            name: name.into(),
            serial_number: serial_number.into(),
            asset_tag: asset_tag.into(),
            ..Default::default()
        }
    }

    /// Mirror a patch that the CMDB accepted
    pub fn apply(&mut self, patch: &FieldPatch) {
        for (field, value) in patch.iter() {
            match (field, value) {
                (CmdbField::SerialNumber, FieldValue::Text(v)) => self.serial_number = v.clone(),
                (CmdbField::ActiveSupportContract, FieldValue::Flag(v)) => {
                    self.active_support_contract = Some(*v)
                }
                (CmdbField::ValidWarrantyData, FieldValue::Flag(v)) => {
                    self.valid_warranty_data = Some(*v)
                }
                (CmdbField::WarrantyExpiration, FieldValue::Date(v)) => {
                    self.warranty_expiration = (*v).into()
                }
                (CmdbField::EndOfLife, FieldValue::Date(v)) => self.end_of_life = (*v).into(),
                (field, value) => {
                    tracing::warn!("Ignoring mistyped value {:?} for {}", value, field)
                }
            }
        }
    }
}
