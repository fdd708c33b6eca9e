//! Results of treasury operations.

use fr_01_fund_registry::Fund;
use fr_02_treasury_ledger::LedgerReceipt;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, FundId};
use uuid::Uuid;

/// Outcome of a donation or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Shared with the ledger transfer and every log line of the call.
    pub correlation_id: Uuid,
    /// Fund as committed.
    pub fund: Fund,
    pub transfer: LedgerReceipt,
    /// Compare-and-set attempts the commit took.
    pub commit_attempts: u32,
}

/// How the ledger compares with local accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconciliationStatus {
    Balanced,
    /// Ledger holds more than `available`; typically a transfer whose commit
    /// lost every retry.
    LedgerSurplus(Amount),
    /// Ledger holds less than `available`.
    LedgerDeficit(Amount),
}

/// Comparison of a fund's `available` with its collecting account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub fund_id: FundId,
    pub tracked_available: Amount,
    pub ledger_balance: Amount,
    pub status: ReconciliationStatus,
}

impl ReconciliationReport {
    pub fn new(fund_id: FundId, tracked_available: Amount, ledger_balance: Amount) -> Self {
        let status = if ledger_balance > tracked_available {
            ReconciliationStatus::LedgerSurplus(ledger_balance - tracked_available)
        } else if ledger_balance < tracked_available {
            ReconciliationStatus::LedgerDeficit(tracked_available - ledger_balance)
        } else {
            ReconciliationStatus::Balanced
        };

        Self {
            fund_id,
            tracked_available,
            ledger_balance,
            status,
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.status == ReconciliationStatus::Balanced
    }
}
