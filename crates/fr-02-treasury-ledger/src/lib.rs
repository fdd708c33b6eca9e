//! # Treasury Ledger (fr-02)
//!
//! Everything the treasury needs to know about the external value-transfer
//! service: where escrow and collecting accounts live, and how to move value
//! between them.
//!
//! ## Account Layout
//!
//! All escrow accounts are sub-accounts of one treasury principal:
//!
//! | Account | Sub-account selector |
//! |---------|----------------------|
//! | Treasury supply holder | `SubAccount::DEFAULT` |
//! | Donor escrow | `sha256("fundraiser/donor" ‖ len ‖ identity)` |
//! | Fund collecting account | `sha256("fundraiser/fund" ‖ id)` |
//!
//! ## Bindings
//!
//! - `LocalTokenLedger` - in-process test token, used in local mode
//! - `JsonRpcLedgerClient` - remote ledger over JSON-RPC 2.0, used in main mode
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Sub-account derivation
//! - `ports/` - `TreasuryLedgerClient` and `TokenAdministration` SPIs
//! - `adapters/` - Local token and JSON-RPC bindings
//! - `error.rs` - `LedgerError`

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

pub use adapters::json_rpc::{JsonRpcLedgerClient, JsonRpcLedgerConfig};
pub use adapters::local::{LocalTokenLedger, FAUCET_AMOUNT};
pub use domain::subaccount::SubaccountAddressDeriver;
pub use error::{LedgerError, LedgerResult};
pub use ports::outbound::{LedgerReceipt, TokenAdministration, TokenMetadata, TreasuryLedgerClient};
