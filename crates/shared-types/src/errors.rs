//! # Error Types
//!
//! Errors raised while parsing or validating shared value types.

use thiserror::Error;

/// Errors produced when decoding an [`AccountAddress`](crate::AccountAddress)
/// from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Text is not valid hexadecimal.
    #[error("Invalid hex in account address: {0}")]
    InvalidHex(String),

    /// Decoded address has the wrong number of bytes.
    #[error("Invalid account address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Embedded CRC32 does not match the digest.
    #[error("Account address checksum mismatch: expected {expected:08x}, got {actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

/// Errors produced when parsing a [`NetworkMode`](crate::NetworkMode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkModeError {
    /// Unknown numeric code (only 0 = local and 1 = main are defined).
    #[error("Unknown network code: {0}")]
    UnknownCode(i8),

    /// Unknown textual name.
    #[error("Unknown network name: {0}")]
    UnknownName(String),
}
