//! Network equipment rules (warranty summary merged with EOX)

use super::{set_date, set_flag};
use crate::core::models::{AssetRecord, CmdbField, EndOfLife, FieldPatch, WarrantyLookupResult};

pub(super) fn reconcile(authoritative: &WarrantyLookupResult, existing: &AssetRecord) -> FieldPatch {
    let mut patch = FieldPatch::new();

    if authoritative.warranty_reported {
        // an end-of-life date marks the record valid regardless of coverage
        let valid = match authoritative.end_of_life {
            EndOfLife::Date(_) => true,
            _ => authoritative.warranty_end.is_some() || authoritative.covered,
        };
        set_flag(&mut patch, CmdbField::ValidWarrantyData, existing.valid_warranty_data, valid);

        set_date(
            &mut patch,
            CmdbField::WarrantyExpiration,
            &existing.warranty_expiration,
            authoritative.warranty_end,
        );
        set_flag(
            &mut patch,
            CmdbField::ActiveSupportContract,
            existing.active_support_contract,
            authoritative.covered,
        );
    } else if matches!(authoritative.end_of_life, EndOfLife::Date(_))
        && existing.valid_warranty_data == Some(false)
    {
        set_flag(&mut patch, CmdbField::ValidWarrantyData, existing.valid_warranty_data, true);
    }

    match authoritative.end_of_life {
        EndOfLife::Unreported => {}
        EndOfLife::NoDate => set_date(&mut patch, CmdbField::EndOfLife, &existing.end_of_life, None),
        EndOfLife::Date(date) => {
            set_date(&mut patch, CmdbField::EndOfLife, &existing.end_of_life, Some(date))
        }
    }

    patch
}
