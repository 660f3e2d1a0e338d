// sidcard/src/encoding.rs
//! From-scratch UTF-16 to UTF-8 transcoder.
//!
//! The chip message stores every textual field as NUL-terminated UTF-16LE.
//! Decoding follows the Unicode reference behaviour: surrogate pairs are
//! combined before encoding, malformed input is reported through an
//! explicit status instead of panicking or substituting, and a code point
//! that would overflow the output budget is rolled back whole.

/// Surrogate handling policy. Every production call site uses `Strict`;
/// `Lenient` encodes unpaired surrogates as-is and is kept for parity
/// with the reference converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Strict,
    Lenient,
}

/// Outcome of a conversion. Partial output accompanies every non-complete
/// status; callers decide whether partial text is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Status {
    /// All input consumed up to the terminating zero unit or slice end.
    Complete,
    /// Input ended in the middle of a surrogate pair.
    SourceExhausted,
    /// Unpaired or out-of-place surrogate in strict mode.
    SourceIllegal,
    /// Output budget exhausted; the offending code point was rolled back.
    TargetExhausted,
}

impl Utf16Status {
    /// The error form of this status, if it is a failure.
    pub fn as_error(self) -> Option<crate::error::TranscodeError> {
        use crate::error::TranscodeError;
        match self {
            Utf16Status::Complete => None,
            Utf16Status::SourceExhausted => Some(TranscodeError::SourceExhausted),
            Utf16Status::SourceIllegal => Some(TranscodeError::SourceIllegal),
            Utf16Status::TargetExhausted => Some(TranscodeError::TargetExhausted),
        }
    }
}

/// Default output budget for a decoded text field, matching the scratch
/// size the reader glue allots per field.
pub const DEFAULT_TEXT_CAP: usize = 256;

const SUR_HIGH_START: u16 = 0xD800;
const SUR_HIGH_END: u16 = 0xDBFF;
const SUR_LOW_START: u16 = 0xDC00;
const SUR_LOW_END: u16 = 0xDFFF;

const HALF_SHIFT: u32 = 10;
const HALF_BASE: u32 = 0x1_0000;
const MAX_SCALAR: u32 = 0x11_0000;
const REPLACEMENT_CHAR: u32 = 0xFFFD;

const BYTE_MARK: u32 = 0x80;
const BYTE_MASK: u32 = 0xBF;
// Indexed by encoded byte count (1..=4).
const FIRST_BYTE_MARK: [u8; 5] = [0x00, 0x00, 0xC0, 0xE0, 0xF0];

/// Convert UTF-16 code units to UTF-8 bytes, writing at most `max_out`
/// bytes. Processing stops at the first zero unit or at slice end.
pub fn decode_utf16(units: &[u16], max_out: usize, mode: Mode) -> (Vec<u8>, Utf16Status) {
    let mut out = Vec::new();
    let mut i = 0usize;

    loop {
        let unit = match units.get(i) {
            Some(&u) if u != 0 => u,
            _ => break,
        };
        i += 1;

        let mut ch = unit as u32;

        if (SUR_HIGH_START..=SUR_HIGH_END).contains(&unit) {
            match units.get(i) {
                Some(&next) if next != 0 => {
                    if (SUR_LOW_START..=SUR_LOW_END).contains(&next) {
                        ch = ((ch - SUR_HIGH_START as u32) << HALF_SHIFT)
                            + (next as u32 - SUR_LOW_START as u32)
                            + HALF_BASE;
                        i += 1;
                    } else if mode == Mode::Strict {
                        // Unpaired high surrogate.
                        return (out, Utf16Status::SourceIllegal);
                    }
                }
                // The 16 bits following the high surrogate are missing.
                _ => return (out, Utf16Status::SourceExhausted),
            }
        } else if mode == Mode::Strict && (SUR_LOW_START..=SUR_LOW_END).contains(&unit) {
            // Surrogate values are illegal outside a pair.
            return (out, Utf16Status::SourceIllegal);
        }

        let bytes_to_write = if ch < 0x80 {
            1
        } else if ch < 0x800 {
            2
        } else if ch < 0x1_0000 {
            3
        } else if ch < MAX_SCALAR {
            4
        } else {
            ch = REPLACEMENT_CHAR;
            3
        };

        if out.len() + bytes_to_write > max_out {
            // Roll back the whole code point; nothing was appended yet.
            return (out, Utf16Status::TargetExhausted);
        }

        let mut scratch = [0u8; 4];
        for slot in (1..bytes_to_write).rev() {
            scratch[slot] = ((ch | BYTE_MARK) & BYTE_MASK) as u8;
            ch >>= 6;
        }
        scratch[0] = (ch as u8) | FIRST_BYTE_MARK[bytes_to_write];
        out.extend_from_slice(&scratch[..bytes_to_write]);
    }

    (out, Utf16Status::Complete)
}

/// Checked form of [`decode_utf16`] for callers that treat any
/// non-complete status as a hard error and do not need partial output.
/// Always strict.
pub fn decode_utf16_checked(units: &[u16], max_out: usize) -> crate::Result<Vec<u8>> {
    let (bytes, status) = decode_utf16(units, max_out, Mode::Strict);
    match status.as_error() {
        None => Ok(bytes),
        Some(err) => Err(err.into()),
    }
}

/// Reassemble UTF-16 code units from a little-endian byte slice. An odd
/// trailing byte is dropped; the chip layout never produces one for a
/// well-formed field.
pub fn utf16le_units(raw: &[u8]) -> Vec<u16> {
    raw.chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Device-glue convenience: decode a raw UTF-16LE field slice to a
/// `String` with the default output budget, keeping whatever partial text
/// a malformed tail still yields.
pub fn utf16le_slice_to_string(raw: &[u8]) -> String {
    let units = utf16le_units(raw);
    let (bytes, _status) = decode_utf16(&units, DEFAULT_TEXT_CAP, Mode::Strict);
    String::from_utf8_lossy(&bytes).into_owned()
}
