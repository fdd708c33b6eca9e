//! # Ports
//!
//! - `inbound` - the registry API driven by the treasury protocol
//! - `outbound` - storage and codec dependencies the host supplies

pub mod inbound;
pub mod outbound;

pub use inbound::FundRegistryApi;
pub use outbound::{BatchOperation, FundSerializer, KeyValueStore, ScanResult};
