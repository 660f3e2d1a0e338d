// sidcard/src/record/fields.rs
//! Per-variant field offset tables.
//!
//! The chip layout differs per document variant: the same semantic field
//! can sit at a different offset, with a different width and a different
//! human-readable label (an ID number is a "permanent residence permit
//! number" on the foreign-resident layout). Each variant gets one
//! immutable table, listed in the variant's fixed display order - the
//! order is part of the device's observable output, not a style choice.

use crate::types::{DocumentVariant, FieldKind};

/// One fixed-width field in a variant's chip layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    /// Byte offset into the chip message.
    pub offset: usize,
    /// Field width in bytes.
    pub len: usize,
    /// Human-readable label for this field on this variant.
    pub label: &'static str,
}

const fn spec(kind: FieldKind, offset: usize, len: usize, label: &'static str) -> FieldSpec {
    FieldSpec {
        kind,
        offset,
        len,
        label,
    }
}

/// National ID card layout, display order.
pub const NATIONAL_ID_FIELDS: &[FieldSpec] = &[
    spec(FieldKind::Name, 0, 15, "name"),
    spec(FieldKind::Sex, 30, 2, "sex"),
    spec(FieldKind::IdNumber, 122, 36, "ID number"),
    spec(FieldKind::Ethnicity, 32, 4, "ethnicity"),
    spec(FieldKind::IssueDay, 188, 16, "validity start date"),
    spec(FieldKind::ExpiryDay, 204, 16, "validity end date"),
    spec(FieldKind::Birthday, 36, 16, "birthday"),
    spec(FieldKind::Authority, 158, 30, "issuing authority"),
    spec(FieldKind::Address, 52, 70, "address"),
];

/// Foreign permanent residence permit layout, display order.
pub const FOREIGN_RESIDENT_FIELDS: &[FieldSpec] = &[
    spec(FieldKind::Name, 0, 60, "name"),
    spec(FieldKind::Sex, 120, 2, "sex"),
    spec(
        FieldKind::IdNumber,
        122,
        30,
        "permanent residence permit number",
    ),
    spec(FieldKind::Ethnicity, 152, 6, "ethnicity"),
    spec(FieldKind::ChineseName, 158, 30, "Chinese name"),
    spec(FieldKind::IssueDay, 188, 16, "issue date"),
    spec(FieldKind::ExpiryDay, 204, 16, "expiry date"),
    spec(FieldKind::Birthday, 220, 16, "birthday"),
    spec(FieldKind::CardVersion, 236, 4, "card version"),
    spec(FieldKind::Authority, 240, 8, "acceptance authority"),
    spec(FieldKind::Reserved, 250, 6, "reserved"),
];

/// HK/Macau/Taiwan resident permit layout, display order.
pub const CROSS_BORDER_FIELDS: &[FieldSpec] = &[
    spec(FieldKind::Name, 0, 15, "name"),
    spec(FieldKind::Sex, 30, 2, "sex"),
    spec(FieldKind::Birthday, 36, 16, "birthday"),
    spec(FieldKind::Address, 52, 70, "address"),
    spec(FieldKind::IdNumber, 122, 36, "ID number"),
    spec(FieldKind::Authority, 158, 30, "issuing authority"),
    spec(FieldKind::IssueDay, 188, 16, "validity start date"),
    spec(FieldKind::ExpiryDay, 204, 16, "validity end date"),
    spec(FieldKind::PassNumber, 220, 18, "pass number"),
    spec(FieldKind::IssueCount, 238, 4, "issue count"),
];

/// The offset table for a classified variant.
pub fn table_for(variant: DocumentVariant) -> &'static [FieldSpec] {
    match variant {
        DocumentVariant::NationalId => NATIONAL_ID_FIELDS,
        DocumentVariant::ForeignPermanentResident => FOREIGN_RESIDENT_FIELDS,
        DocumentVariant::CrossBorderResident => CROSS_BORDER_FIELDS,
    }
}
