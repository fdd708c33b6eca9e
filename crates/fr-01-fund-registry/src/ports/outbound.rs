//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the Fund Registry requires the host application to provide.

use crate::domain::entities::Fund;
use crate::domain::errors::{KVStoreError, SerializationError};

/// Key/value pairs returned by a prefix scan, in key order.
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Abstract interface for an ordered, durable key-value map.
///
/// Production: `RocksDbStore` (feature `rocksdb`)
/// Development: `FileBackedKVStore`
/// Testing: `InMemoryKVStore`
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either ALL operations in the batch are applied, or NONE are.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;

    /// All entries whose key starts with `prefix`, sorted by key.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError>;
}

/// Batch operation for atomic writes.
///
/// The registry is append-only, so a batch never deletes.
#[derive(Debug, Clone)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Abstract interface for fund record encoding.
pub trait FundSerializer: Send + Sync {
    /// Serialize a Fund to bytes.
    fn serialize(&self, fund: &Fund) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a Fund.
    fn deserialize(&self, data: &[u8]) -> Result<Fund, SerializationError>;
}
