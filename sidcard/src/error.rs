// sidcard/src/error.rs

use thiserror::Error;

/// Errors that abort a single scan cycle or the session setup. None of
/// these are fatal to the process; the caller is expected to retry the
/// cycle on the next poll.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no reader port available, last status {last_status:#04x}")]
    NoPortAvailable { last_status: i32 },

    #[error("find card failed: status {status:#04x}")]
    FindFailed { status: i32 },

    #[error("select card failed: status {status:#04x}")]
    SelectFailed { status: i32 },

    #[error("read base message failed: status {status:#04x}")]
    ReadFailed { status: i32 },

    // The reader is known to report 0x90 with an empty chip payload on
    // transient misreads; callers must see that as a distinct failure.
    #[error("chip message empty despite success status")]
    EmptyMessage,

    #[error("session is not open")]
    NotOpen,

    #[error("invalid message length: capacity {capacity}, got {actual}")]
    InvalidLength { capacity: usize, actual: usize },

    #[error("utf-16 transcode failed: {0}")]
    Transcode(#[from] TranscodeError),
}

/// Strict-mode transcoder failures, one per malformed-input class.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("illegal utf-16 sequence")]
    SourceIllegal,

    #[error("utf-16 input ended inside a surrogate pair")]
    SourceExhausted,

    #[error("utf-8 output buffer exhausted")]
    TargetExhausted,
}

/// Photo-path trouble. Downgraded to a warning by contract: a missing or
/// corrupt portrait never invalidates the textual record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoWarning {
    #[error("decoded portrait size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("portrait decode failed: {0}")]
    DecodeFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
