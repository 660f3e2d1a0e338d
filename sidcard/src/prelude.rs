// sidcard/src/prelude.rs

pub use crate::message::{ChipMessage, PhotoMessage};
pub use crate::photo::{PhotoDecoder, Portrait};
pub use crate::record::{DecodedField, DecodedRecord};
pub use crate::sdk::{MockSdt, SdtApi};
pub use crate::session::{Poll, Scan, Session, SessionBuilder};
pub use crate::{
    DocumentVariant, Error, FieldKind, PhotoWarning, PortId, Result, Status, TranscodeError,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
