//! Utilities for sidcard: small, reusable helpers used across the crate.
//!
//! Currently only hex formatting for trace logging and test assertions.

pub mod hex;

// Re-export at the `utils` module level so callers can use
// `crate::utils::bytes_to_hex(...)` directly.
pub use hex::*;
