// sidcard/src/lib.rs

//! sidcard
//!
//! Pure Rust record decoder for SDT-protocol resident ID-card readers.
//!
//! The crate acquires a logical reader port, drives the per-cycle read
//! sequence against it, classifies the document sub-type from the chip
//! message, and extracts the textual record through a from-scratch
//! UTF-16 to UTF-8 transcoder. The vendor SDK and the portrait
//! decompressor stay behind traits; everything on this side is plain
//! synchronous Rust.
#![warn(missing_docs)]

pub mod constants;
pub mod encoding;
pub mod error;
pub mod message;
pub mod photo;
pub mod prelude;
pub mod record;
pub mod sdk;
pub mod session;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
