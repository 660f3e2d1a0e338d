// sidcard/src/constants.rs
//! Wire-contract constants shared across the crate.
//!
//! The SDT reader protocol is a small fixed vocabulary of request codes,
//! status bytes, and buffer sizes. None of these may be altered without
//! breaking compatibility with the deployed readers.

/// Status returned by a successful open-port / select-card / read-base request.
pub const STATUS_OK: i32 = 0x90;

/// Status paired with [`STATUS_OK`] on the application-message probe; both
/// mean "no card event pending" on that request.
pub const STATUS_APP_IDLE: i32 = 0x91;

/// Status returned by a successful find-card request. The find step is the
/// only request in the vocabulary that does not report success as 0x90.
pub const STATUS_FIND_OK: i32 = 0x9F;

/// First logical reader port probed during acquisition.
pub const PORT_RANGE_START: u16 = 1001;

/// Last logical reader port probed during acquisition (inclusive).
pub const PORT_RANGE_END: u16 = 1016;

/// Capacity of the chip (textual) message buffer in bytes.
pub const CHIP_MSG_CAPACITY: usize = 512;

/// Capacity of the compressed photo message buffer in bytes.
pub const PHOTO_MSG_CAPACITY: usize = 1024;

/// Scratch size for the application-message probe.
pub const APP_MSG_CAPACITY: usize = 320;

/// IIN scratch size returned by find-card.
pub const IIN_LEN: usize = 4;

/// Serial-number scratch size returned by select-card.
pub const SN_LEN: usize = 8;

/// Byte offset of the 2-byte document type marker inside the chip message.
pub const TYPE_MARKER_OFFSET: usize = 248;

/// Exact length of a decoded portrait bitmap in bytes.
pub const PORTRAIT_LEN: usize = 38862;
