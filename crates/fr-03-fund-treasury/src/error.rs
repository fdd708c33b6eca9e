//! Error types for the fund treasury.

use fr_01_fund_registry::RegistryError;
use fr_02_treasury_ledger::{LedgerError, LedgerReceipt};
use shared_types::{AccountAddress, AddressError, Amount, FundId};
use thiserror::Error;

/// Fund treasury errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FundraiserError {
    /// Unknown fund id.
    #[error("Fund not found: {id}")]
    NotFound { id: FundId },

    /// Caller lacks the role the operation requires.
    #[error("Caller {caller} is not authorized to {operation}")]
    Unauthorized {
        caller: String,
        operation: &'static str,
        fund_id: Option<FundId>,
    },

    /// Fund is paused or expired, or the request is empty.
    #[error("Invalid state for fund {id}: {reason}")]
    InvalidState { id: FundId, reason: String },

    /// Withdrawal attempted before `total_amount_funded >= amount`.
    #[error("Fund {id} has raised {raised} of its {target} target")]
    TargetNotReached {
        id: FundId,
        target: Amount,
        raised: Amount,
    },

    /// Donor escrow holds nothing, or less than the declared amount.
    #[error("Escrow account {account} holds {balance}, donation needs {requested}")]
    SubaccountNotFunded {
        account: AccountAddress,
        balance: Amount,
        requested: Amount,
    },

    /// The ledger rejected or failed a transfer; no local state changed.
    #[error("Ledger transfer failed: {0}")]
    LedgerTransferFailed(LedgerError),

    /// Ledger balance query failed.
    #[error("Ledger unavailable: {0}")]
    LedgerUnavailable(LedgerError),

    /// Commit lost every compare-and-set attempt.
    ///
    /// When `receipt` is present the transfer already happened and the fund
    /// needs manual reconciliation.
    #[error("Fund {id} commit lost {attempts} compare-and-set attempt(s)")]
    Conflict {
        id: FundId,
        attempts: u32,
        receipt: Option<Box<LedgerReceipt>>,
    },

    /// The transfer confirmed but recording it failed for a reason other
    /// than contention. The fund needs manual reconciliation.
    #[error("Fund {id} transfer {} confirmed but not recorded: {cause}", .receipt.correlation_id)]
    UnrecordedTransfer {
        id: FundId,
        receipt: Box<LedgerReceipt>,
        cause: Box<FundraiserError>,
    },

    #[error("Fundraiser already initialized")]
    AlreadyInitialized,

    #[error("Fundraiser not initialized")]
    NotInitialized,

    /// Destination text is not a valid ledger account address.
    #[error("Invalid destination address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// Registry storage failure.
    #[error("Storage error: {reason}")]
    Storage { reason: String },

    /// Programmer-invariant violation, e.g. a corrupted id counter.
    #[error("Invariant violated: {reason}")]
    InvariantViolation { reason: String },
}

/// Result type for treasury operations
pub type FundraiserResult<T> = Result<T, FundraiserError>;

impl From<RegistryError> for FundraiserError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { id } => FundraiserError::NotFound { id },
            RegistryError::Unauthorized {
                id,
                caller,
                operation,
            } => FundraiserError::Unauthorized {
                caller,
                operation,
                fund_id: Some(id),
            },
            RegistryError::Conflict { id, .. } => FundraiserError::Conflict {
                id,
                attempts: 1,
                receipt: None,
            },
            RegistryError::InvariantViolation { reason } => {
                FundraiserError::InvariantViolation { reason }
            }
            RegistryError::Storage(e) => FundraiserError::Storage {
                reason: e.to_string(),
            },
            RegistryError::Serialization(e) => FundraiserError::Storage {
                reason: e.to_string(),
            },
        }
    }
}

impl FundraiserError {
    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FundraiserError::NotFound { .. } => "not_found",
            FundraiserError::Unauthorized { .. } => "unauthorized",
            FundraiserError::InvalidState { .. } => "invalid_state",
            FundraiserError::TargetNotReached { .. } => "target_not_reached",
            FundraiserError::SubaccountNotFunded { .. } => "subaccount_not_funded",
            FundraiserError::LedgerTransferFailed(_) => "ledger_transfer_failed",
            FundraiserError::LedgerUnavailable(_) => "ledger_unavailable",
            FundraiserError::Conflict { .. } => "conflict",
            FundraiserError::UnrecordedTransfer { .. } => "unrecorded_transfer",
            FundraiserError::AlreadyInitialized => "already_initialized",
            FundraiserError::NotInitialized => "not_initialized",
            FundraiserError::InvalidAddress(_) => "invalid_address",
            FundraiserError::Storage { .. } => "storage",
            FundraiserError::InvariantViolation { .. } => "invariant_violation",
        }
    }

    /// Ledger receipt of a transfer that moved value without a matching
    /// local record.
    pub fn receipt(&self) -> Option<&LedgerReceipt> {
        match self {
            FundraiserError::Conflict { receipt, .. } => receipt.as_deref(),
            FundraiserError::UnrecordedTransfer { receipt, .. } => Some(receipt.as_ref()),
            _ => None,
        }
    }
}
