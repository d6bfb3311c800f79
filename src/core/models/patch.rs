//! Partial updates to CMDB records

use super::format_date;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// CMDB columns the sync reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CmdbField {
    SerialNumber,
    WarrantyExpiration,
    ActiveSupportContract,
    EndOfLife,
    ValidWarrantyData,
}

impl CmdbField {
    /// Column name in the CMDB table
    pub fn column(&self) -> &'static str {
        match self {
            CmdbField::SerialNumber => "serial_number",
            CmdbField::WarrantyExpiration => "warranty_expiration",
            CmdbField::ActiveSupportContract => "u_active_support_contract",
            CmdbField::EndOfLife => "u_end_of_life",
            CmdbField::ValidWarrantyData => "u_valid_warranty_data",
        }
    }
}

impl fmt::Display for CmdbField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Value written to a single CMDB column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    /// `None` clears the column
    Date(Option<NaiveDate>),
}

impl FieldValue {
    /// Wire representation; the CMDB stores everything as strings
    pub fn to_wire(&self) -> String {
        match self {
            FieldValue::Text(v) => v.clone(),
            FieldValue::Flag(v) => v.to_string(),
            FieldValue::Date(Some(d)) => format_date(d),
            FieldValue::Date(None) => String::new(),
        }
    }
}

/// Set of field changes for one record
///
/// Ordered by field so payloads and logs are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    fields: BTreeMap<CmdbField, FieldValue>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: CmdbField, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn with(mut self, field: CmdbField, value: FieldValue) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: CmdbField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CmdbField, &FieldValue)> {
        self.fields.iter()
    }

    /// JSON body for a CMDB update request
    pub fn to_payload(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(field, value)| (field.column().to_string(), Value::String(value.to_wire())))
            .collect()
    }
}

impl fmt::Display for FieldPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, value)| format!("{}='{}'", field, value.to_wire()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
