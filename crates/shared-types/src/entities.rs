//! # Core Value Types
//!
//! ## Clusters
//!
//! - **Scalars**: `Amount`, `Timestamp`, `FundId`, `DurationNanos`
//! - **Identity**: `Identity` (caller principal bytes)
//! - **Ledger addressing**: `SubAccount`, `AccountAddress`
//! - **Mode**: `NetworkMode`

use crate::errors::{AddressError, NetworkModeError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SCALARS
// =============================================================================

/// Ledger value in base units.
pub type Amount = u128;

/// Host logical clock, nanoseconds since the Unix epoch.
pub type Timestamp = u64;

/// A span of time in nanoseconds.
pub type DurationNanos = u64;

/// Monotonically assigned fund identifier.
pub type FundId = u64;

// =============================================================================
// IDENTITY
// =============================================================================

/// Caller identity (principal). Arbitrary-length opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Identity(pub Vec<u8>);

impl Identity {
    /// Wrap raw principal bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Identity whose bytes are the UTF-8 encoding of `text`.
    pub fn from_text(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Default-sub-account ledger address owned by this identity.
    pub fn account(&self) -> AccountAddress {
        AccountAddress::new(self, &SubAccount::DEFAULT)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// =============================================================================
// LEDGER ADDRESSING
// =============================================================================

/// 32-byte sub-account selector isolating deposits within one owner's account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubAccount(pub [u8; 32]);

impl SubAccount {
    /// The all-zero selector.
    pub const DEFAULT: SubAccount = SubAccount([0u8; 32]);

    /// Selector whose trailing eight bytes are `n` big-endian.
    pub fn from_u64(n: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }
}

impl Default for SubAccount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Domain separator prepended to account identifier preimages.
const ACCOUNT_DOMAIN_SEPARATOR: &[u8] = b"\x0Aaccount-id";

/// Ledger account identifier: `crc32(digest) ‖ sha224(sep ‖ owner ‖ sub)`.
///
/// Rendered as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountAddress(pub [u8; 32]);

impl AccountAddress {
    /// Byte length of an encoded address.
    pub const LEN: usize = 32;

    /// Derive the account identifier for `owner` and `subaccount`.
    pub fn new(owner: &Identity, subaccount: &SubAccount) -> Self {
        let mut hasher = Sha224::new();
        hasher.update(ACCOUNT_DOMAIN_SEPARATOR);
        hasher.update(owner.as_bytes());
        hasher.update(subaccount.0);
        let digest = hasher.finalize();

        let checksum = crc32fast::hash(&digest);
        let mut bytes = [0u8; Self::LEN];
        bytes[..4].copy_from_slice(&checksum.to_be_bytes());
        bytes[4..].copy_from_slice(&digest);
        Self(bytes)
    }

    /// Parse a 64-character hex address and verify its checksum.
    pub fn from_hex(text: &str) -> Result<Self, AddressError> {
        let raw = hex::decode(text.trim()).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        if raw.len() != Self::LEN {
            return Err(AddressError::InvalidLength {
                expected: Self::LEN,
                actual: raw.len(),
            });
        }

        let expected = crc32fast::hash(&raw[4..]);
        let actual = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
        if expected != actual {
            return Err(AddressError::ChecksumMismatch { expected, actual });
        }

        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// =============================================================================
// NETWORK MODE
// =============================================================================

/// Selects which ledger binding backs treasury calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkMode {
    /// In-process test token.
    #[default]
    Local,
    /// Remote production ledger.
    Main,
}

impl NetworkMode {
    /// Decode the wire code used by initialization payloads (0 = local, 1 = main).
    pub fn from_code(code: i8) -> Result<Self, NetworkModeError> {
        match code {
            0 => Ok(NetworkMode::Local),
            1 => Ok(NetworkMode::Main),
            other => Err(NetworkModeError::UnknownCode(other)),
        }
    }

    pub fn code(&self) -> i8 {
        match self {
            NetworkMode::Local => 0,
            NetworkMode::Main => 1,
        }
    }
}

impl FromStr for NetworkMode {
    type Err = NetworkModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "0" => Ok(NetworkMode::Local),
            "main" | "mainnet" | "1" => Ok(NetworkMode::Main),
            other => Err(NetworkModeError::UnknownName(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::Local => f.write_str("local"),
            NetworkMode::Main => f.write_str("main"),
        }
    }
}
