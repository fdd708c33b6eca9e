//! Error types for the treasury ledger bindings.

use shared_types::{AccountAddress, Amount};
use thiserror::Error;

/// Ledger binding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger could not be reached.
    #[error("Ledger unavailable: {reason}")]
    Unavailable { reason: String },

    /// Source account cannot cover the transfer.
    #[error("Insufficient funds in {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountAddress,
        balance: Amount,
        requested: Amount,
    },

    /// The ledger refused the request.
    #[error("Ledger rejected request: {reason}")]
    Rejected { reason: String },

    /// JSON-RPC error object returned by a remote ledger.
    #[error("Ledger RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response could not be decoded.
    #[error("Invalid ledger response: {reason}")]
    InvalidResponse { reason: String },

    /// `initialize_supply` was already called on this token.
    #[error("Token supply already initialized")]
    SupplyAlreadyInitialized,

    /// Token operations require an initialized supply.
    #[error("Token supply not initialized")]
    SupplyNotInitialized,
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
