// sidcard/src/photo.rs

use std::path::Path;

use crate::constants::PORTRAIT_LEN;
use crate::error::PhotoWarning;

/// Opaque portrait decompressor. The real implementation wraps the
/// vendor's decoding routine; the transform itself is out of scope here.
pub trait PhotoDecoder {
    /// Decompress a raw photo message into bitmap bytes, or report a
    /// vendor-side failure message.
    fn decode(&mut self, photo: &[u8]) -> Result<Vec<u8>, String>;
}

/// A decoded portrait bitmap of the documented fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portrait {
    bytes: Vec<u8>,
}

impl Portrait {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Persist the bitmap to disk.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.bytes)
    }
}

/// Run the opaque decoder over a photo message and validate the result
/// size. Either warning leaves the textual record untouched; the caller
/// decides whether to log or surface it.
pub fn decode_portrait(
    decoder: &mut dyn PhotoDecoder,
    photo: &[u8],
) -> Result<Portrait, PhotoWarning> {
    let bytes = decoder.decode(photo).map_err(PhotoWarning::DecodeFailed)?;
    if bytes.len() != PORTRAIT_LEN {
        return Err(PhotoWarning::SizeMismatch {
            expected: PORTRAIT_LEN,
            actual: bytes.len(),
        });
    }
    Ok(Portrait { bytes })
}
