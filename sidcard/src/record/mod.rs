// sidcard/src/record/mod.rs

use std::fmt;

use log::debug;

use crate::encoding::{self, Mode, Utf16Status};
use crate::message::ChipMessage;
use crate::types::{DocumentVariant, FieldKind};

pub mod ethnicity;
pub mod fields;

pub use ethnicity::ethnicity_name;
pub use fields::{FieldSpec, table_for};

/// Output budget for the ethnicity field decode; the code is a short
/// digit run, so the glue allots a small scratch.
const ETHNICITY_TEXT_CAP: usize = 10;

/// One decoded field: semantic kind, the variant's label for it, and the
/// decoded UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedField {
    pub kind: FieldKind,
    pub label: &'static str,
    pub value: String,
}

/// The textual record decoded from one chip message. A value type: it
/// keeps no reference to the raw buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedRecord {
    variant: DocumentVariant,
    fields: Vec<DecodedField>,
}

impl DecodedRecord {
    /// Classify the chip message and extract every field of the selected
    /// variant, in the variant's display order.
    ///
    /// Field-level transcode trouble keeps whatever partial text was
    /// produced; a single bad field never aborts the record.
    pub fn decode(chip: &ChipMessage) -> Self {
        let variant = DocumentVariant::classify(chip);
        let fields = table_for(variant)
            .iter()
            .map(|spec| DecodedField {
                kind: spec.kind,
                label: spec.label,
                value: decode_field(chip, spec),
            })
            .collect();
        Self { variant, fields }
    }

    pub fn variant(&self) -> DocumentVariant {
        self.variant
    }

    /// Decoded fields in the variant's fixed display order.
    pub fn fields(&self) -> &[DecodedField] {
        &self.fields
    }

    /// Value of a semantic field, if the variant carries it.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.value.as_str())
    }
}

impl fmt::Display for DecodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            writeln!(f, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

fn decode_field(chip: &ChipMessage, spec: &FieldSpec) -> String {
    let raw = chip.field_bytes(spec.offset, spec.len);
    match spec.kind {
        FieldKind::Sex => {
            // Binary encoding: the slice holds a decimal digit, 1 is male
            // and everything else female.
            let text = decode_text(raw, encoding::DEFAULT_TEXT_CAP, spec.label);
            if leading_int(&text) == 1 {
                "male".to_string()
            } else {
                "female".to_string()
            }
        }
        FieldKind::Ethnicity => {
            let text = decode_text(raw, ETHNICITY_TEXT_CAP, spec.label);
            ethnicity_name(leading_int(&text)).to_string()
        }
        _ => decode_text(raw, encoding::DEFAULT_TEXT_CAP, spec.label),
    }
}

fn decode_text(raw: &[u8], cap: usize, label: &str) -> String {
    let units = encoding::utf16le_units(raw);
    let (bytes, status) = encoding::decode_utf16(&units, cap, Mode::Strict);
    if status != Utf16Status::Complete {
        debug!("field '{}' transcode stopped early: {:?}", label, status);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// `atoi` semantics: optional leading whitespace, then the longest run of
/// decimal digits; anything else parses as 0.
fn leading_int(s: &str) -> u32 {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
