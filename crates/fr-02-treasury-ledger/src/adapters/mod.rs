//! Ledger bindings.

pub mod json_rpc;
pub mod local;
