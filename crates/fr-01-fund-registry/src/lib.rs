//! # Fund Registry (fr-01)
//!
//! The authoritative store of fund records. Every mutation of a fund passes
//! through this crate, which makes it the single choke point where lost
//! updates across asynchronous suspension points are detected.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Monotonic ids | Ids strictly increase in assignment order, never reused |
//! | 2 | Append-only | Records are never deleted |
//! | 3 | Expiry floor | `expiry >= created_at` at all times |
//! | 4 | Monotonic funding | `total_amount_funded` never decreases |
//! | 5 | Raiser authority | Only the raiser toggles `active` or edits `expiry` |
//! | 6 | Compare-and-set | A commit lands only against the exact stored snapshot |
//!
//! ## Persisted Layout
//!
//! ```text
//! fund/00000000000000000000  -> bincode(Fund)   (id 0)
//! fund/00000000000000000001  -> bincode(Fund)   (id 1)
//! meta/next_id               -> u64 big-endian
//! ```
//!
//! Zero-padded decimal keys keep the ordered map in id order, so a prefix
//! scan over `fund/` lists funds in insertion order.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Fund entity, authorization guard, key layout, errors
//! - `ports/` - Inbound registry API, outbound key-value store and codec
//! - `adapters/` - In-memory, file-backed and RocksDB stores, bincode codec
//! - `service.rs` - `FundRegistry` implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use fr_01_fund_registry::{FundRegistry, InMemoryKVStore, FundRegistryApi};
//!
//! let registry = FundRegistry::new(InMemoryKVStore::new());
//! let fund = registry.create(100, recipient, 1_000, raiser, now)?;
//!
//! let snapshot = registry.get(fund.id)?.unwrap();
//! let next = snapshot.with_donation(60).unwrap();
//! registry.compare_and_set(fund.id, &snapshot, next)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::serializer::BincodeFundSerializer;
pub use adapters::storage::{FileBackedKVStore, InMemoryKVStore};
#[cfg(feature = "rocksdb")]
pub use adapters::storage::{RocksDbConfig, RocksDbStore};
pub use domain::entities::{Fund, FundingProgress};
pub use domain::errors::{KVStoreError, RegistryError, RegistryResult, SerializationError};
pub use domain::guard::AuthorizationGuard;
pub use ports::inbound::FundRegistryApi;
pub use ports::outbound::{BatchOperation, FundSerializer, KeyValueStore, ScanResult};
pub use service::FundRegistry;
