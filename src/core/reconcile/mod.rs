//! Record reconciliation
//!
//! Compares what a vendor reports for an identifier with the CMDB snapshot
//! and computes the smallest patch that brings the CMDB in line. Nothing in
//! here performs I/O.

mod network;
mod server;


use crate::core::models::{
    AssetRecord, CmdbField, FieldPatch, FieldValue, StoredDate, VendorFamily,
    WarrantyLookupResult,
};
use chrono::NaiveDate;

/// What to write back for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Warranty fields changed; written by name and serial number
    Update(FieldPatch),
    /// The record's warranty data cannot be trusted; written by system id
    Invalidate { patch: FieldPatch, reason: String },
}

impl Reconciliation {
    pub fn patch(&self) -> &FieldPatch {
        match self {
            Reconciliation::Update(patch) => patch,
            Reconciliation::Invalidate { patch, .. } => patch,
        }
    }

    /// An empty patch never triggers a write
    pub fn is_empty(&self) -> bool {
        self.patch().is_empty()
    }
}

/// Reconcile one vendor result against the stored record
pub fn reconcile(
    family: VendorFamily,
    authoritative: &WarrantyLookupResult,
    existing: &AssetRecord,
) -> Reconciliation {
    if let Some(kind) = &authoritative.error {
        return invalidate(existing, kind.to_string());
    }

    let patch = match family {
        VendorFamily::Cisco => network::reconcile(authoritative, existing),
        VendorFamily::Dell => server::reconcile(authoritative, existing),
    };
    Reconciliation::Update(patch)
}

/// Flag a record's warranty data as invalid, touching nothing else
pub fn invalidate(existing: &AssetRecord, reason: impl Into<String>) -> Reconciliation {
    let mut patch = FieldPatch::new();
    set_flag(&mut patch, CmdbField::ValidWarrantyData, existing.valid_warranty_data, false);
    Reconciliation::Invalidate {
        patch,
        reason: reason.into(),
    }
}

fn set_flag(patch: &mut FieldPatch, field: CmdbField, current: Option<bool>, wanted: bool) {
    if current != Some(wanted) {
        patch.set(field, FieldValue::Flag(wanted));
    }
}

fn set_date(
    patch: &mut FieldPatch,
    field: CmdbField,
    current: &StoredDate,
    wanted: Option<NaiveDate>,
) {
    if !current.holds(wanted) {
        patch.set(field, FieldValue::Date(wanted));
    }
}
