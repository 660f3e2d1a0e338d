// sidcard/src/types.rs

use derive_more::Display;

use crate::constants::TYPE_MARKER_OFFSET;

/// Logical reader port identifier - Newtype Pattern.
///
/// The SDT dynamic library enumerates a small fixed address space of
/// logical reader slots; see [`crate::constants::PORT_RANGE_START`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortId(u16);

impl PortId {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// Raw status code returned by every SDT request.
///
/// The closed set on the wire is {0x90, 0x91, 0x9F, other}; anything else
/// is an SDK-internal failure code and only useful for diagnostics.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#04x}", _0)]
pub struct Status(i32);

impl Status {
    /// Open-port / select-card / read-base success.
    pub const OK: Self = Self(crate::constants::STATUS_OK);
    /// Application-probe companion to [`Status::OK`]: nothing to read.
    pub const APP_IDLE: Self = Self(crate::constants::STATUS_APP_IDLE);
    /// Find-card success.
    pub const FIND_OK: Self = Self(crate::constants::STATUS_FIND_OK);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn code(&self) -> i32 {
        self.0
    }
}

/// Document sub-type recognized from the chip-message type marker.
///
/// The 2-byte marker at offset 248 is NUL-padded ASCII: `I` selects the
/// foreign permanent residence permit, `J` the HK/Macau/Taiwan resident
/// permit, anything else the national ID card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentVariant {
    NationalId,
    ForeignPermanentResident,
    CrossBorderResident,
}

impl DocumentVariant {
    /// Map the raw 2-byte marker to a variant. Comparison is exact: the
    /// marker must be the single letter followed by a NUL pad, so `"IX"`
    /// classifies as the national ID default.
    pub fn from_marker(marker: [u8; 2]) -> Self {
        match marker {
            [b'I', 0] => Self::ForeignPermanentResident,
            [b'J', 0] => Self::CrossBorderResident,
            _ => Self::NationalId,
        }
    }

    /// Classify a chip message by its embedded type marker. The marker is
    /// re-derived from the buffer on every call; no flag is stored.
    pub fn classify(chip: &crate::message::ChipMessage) -> Self {
        let raw = chip.as_raw();
        Self::from_marker([raw[TYPE_MARKER_OFFSET], raw[TYPE_MARKER_OFFSET + 1]])
    }
}

/// Semantic field identifiers across all document variants. A variant's
/// offset table decides which of these it carries and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    Name,
    ChineseName,
    CardVersion,
    Reserved,
    Sex,
    Ethnicity,
    Birthday,
    Address,
    Authority,
    IdNumber,
    IssueDay,
    ExpiryDay,
    PassNumber,
    IssueCount,
}
