//! Driven Ports (SPI - Outbound Dependencies)
//!
//! Ledger ports live in `fr-02-treasury-ledger`; the registry port in
//! `fr-01-fund-registry`. This crate adds the clock.

use shared_types::Timestamp;

/// Source of the host clock.
pub trait TimeSource: Send + Sync {
    /// Nanoseconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}
