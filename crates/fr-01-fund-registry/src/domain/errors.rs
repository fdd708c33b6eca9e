//! # Domain Errors
//!
//! Error types for the Fund Registry.

use shared_types::FundId;
use std::fmt;
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No fund with this id.
    #[error("Fund not found: {id}")]
    NotFound { id: FundId },

    /// Caller does not hold the role required for this mutation.
    #[error("Caller {caller} is not authorized to {operation} fund {id}")]
    Unauthorized {
        id: FundId,
        caller: String,
        operation: &'static str,
    },

    /// Stored record no longer matches the snapshot the caller read.
    #[error("Fund {id} changed since it was read: expected revision {expected_revision}, found {actual_revision}")]
    Conflict {
        id: FundId,
        expected_revision: u64,
        actual_revision: u64,
    },

    /// Persisted state contradicts a registry invariant.
    #[error("Registry invariant violated: {reason}")]
    InvariantViolation { reason: String },

    /// Key-value store failure.
    #[error("Storage error: {0}")]
    Storage(#[from] KVStoreError),

    /// Record encoding failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KVStoreError {
    /// I/O error during read/write.
    IOError { message: String },
    /// Data corruption in the store.
    CorruptionError { message: String },
    /// Store is held by another process.
    Locked { message: String },
}

impl fmt::Display for KVStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KVStoreError::IOError { message } => write!(f, "KV store I/O error: {}", message),
            KVStoreError::CorruptionError { message } => {
                write!(f, "KV store corruption: {}", message)
            }
            KVStoreError::Locked { message } => write!(f, "KV store locked: {}", message),
        }
    }
}

impl std::error::Error for KVStoreError {}

/// Serialization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationError {
    pub message: String,
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SerializationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kv_error_conversion() {
        let kv_err = KVStoreError::IOError {
            message: "disk failure".to_string(),
        };
        let err: RegistryError = kv_err.into();

        match err {
            RegistryError::Storage(inner) => assert!(inner.to_string().contains("disk failure")),
            _ => panic!("Expected Storage"),
        }
    }

    #[test]
    fn test_conflict_display() {
        let err = RegistryError::Conflict {
            id: 3,
            expected_revision: 1,
            actual_revision: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Fund 3"));
        assert!(msg.contains("revision 1"));
    }
}
