//! # Store Backends
//!
//! One concrete `KeyValueStore` that dispatches to the backend chosen by
//! configuration, so the registry type does not depend on it.

use crate::config::{StoreBackend, StoreConfig};
use fr_01_fund_registry::{
    BatchOperation, FileBackedKVStore, InMemoryKVStore, KVStoreError, KeyValueStore, ScanResult,
};
#[cfg(feature = "rocksdb")]
use fr_01_fund_registry::{RocksDbConfig, RocksDbStore};
use tracing::info;

/// Errors opening the configured store.
#[derive(Debug, thiserror::Error)]
pub enum StoreOpenError {
    #[error(transparent)]
    Store(#[from] KVStoreError),

    #[error("RocksDB backend requested but the `rocksdb` feature is disabled")]
    RocksDbDisabled,
}

/// Fund store selected at startup.
pub enum NodeStore {
    Memory(InMemoryKVStore),
    File(FileBackedKVStore),
    #[cfg(feature = "rocksdb")]
    RocksDb(RocksDbStore),
}

impl NodeStore {
    pub fn open(config: &StoreConfig) -> Result<Self, StoreOpenError> {
        match config.backend {
            StoreBackend::Memory => {
                info!("[fundraiser] Using in-memory fund store");
                Ok(NodeStore::Memory(InMemoryKVStore::new()))
            }
            StoreBackend::File => {
                let path = config.file_path();
                info!("[fundraiser] Using file fund store at {}", path.display());
                Ok(NodeStore::File(FileBackedKVStore::open(path)?))
            }
            #[cfg(feature = "rocksdb")]
            StoreBackend::RocksDb => {
                let path = config.rocksdb_path();
                info!("[fundraiser] Using RocksDB fund store at {}", path.display());
                let rocks = RocksDbConfig {
                    path: path.to_string_lossy().into_owned(),
                    ..RocksDbConfig::default()
                };
                Ok(NodeStore::RocksDb(RocksDbStore::open(rocks)?))
            }
            #[cfg(not(feature = "rocksdb"))]
            StoreBackend::RocksDb => Err(StoreOpenError::RocksDbDisabled),
        }
    }

    fn inner(&self) -> &dyn KeyValueStore {
        match self {
            NodeStore::Memory(s) => s,
            NodeStore::File(s) => s,
            #[cfg(feature = "rocksdb")]
            NodeStore::RocksDb(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn KeyValueStore {
        match self {
            NodeStore::Memory(s) => s,
            NodeStore::File(s) => s,
            #[cfg(feature = "rocksdb")]
            NodeStore::RocksDb(s) => s,
        }
    }
}

impl KeyValueStore for NodeStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.inner().get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.inner_mut().put(key, value)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.inner_mut().atomic_batch_write(operations)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.inner().exists(key)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        self.inner().prefix_scan(prefix)
    }
}
