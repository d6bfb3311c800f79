//! Server hardware rules (entitlement end dates)

use super::{set_date, set_flag};
use crate::core::models::{AssetRecord, CmdbField, FieldPatch, WarrantyLookupResult};

pub(super) fn reconcile(authoritative: &WarrantyLookupResult, existing: &AssetRecord) -> FieldPatch {
    let mut patch = FieldPatch::new();

    set_date(
        &mut patch,
        CmdbField::WarrantyExpiration,
        &existing.warranty_expiration,
        authoritative.warranty_end,
    );
    set_flag(
        &mut patch,
        CmdbField::ValidWarrantyData,
        existing.valid_warranty_data,
        authoritative.warranty_end.is_some(),
    );

    patch
}
