//! # Treasury Metrics
//!
//! Prometheus metrics for donations, withdrawals and commit contention.
//!
//! Enable with the `metrics` feature:
//! ```toml
//! fr-03-fund-treasury = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `fundraiser_funds_created_total` - Counter of created funds
//! - `fundraiser_donations_total` - Counter of committed donations
//! - `fundraiser_donated_amount_total` - Counter of donated base units
//! - `fundraiser_withdrawals_total` - Counter of committed withdrawals
//! - `fundraiser_commit_conflicts_total` - Counter of lost compare-and-set attempts
//! - `fundraiser_unreconciled_transfers_total` - Counter of transfers whose commit gave up
//! - `fundraiser_operations_rejected_total` - Counter of rejected operations (by reason)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_counter_vec, register_int_counter, CounterVec, IntCounter};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref FUNDS_CREATED: IntCounter = register_int_counter!(
        "fundraiser_funds_created_total",
        "Total number of funds created"
    )
    .expect("Failed to create FUNDS_CREATED metric");

    pub static ref DONATIONS: IntCounter = register_int_counter!(
        "fundraiser_donations_total",
        "Total number of committed donations"
    )
    .expect("Failed to create DONATIONS metric");

    /// Saturates at `u64::MAX` base units.
    pub static ref DONATED_AMOUNT: IntCounter = register_int_counter!(
        "fundraiser_donated_amount_total",
        "Total base units donated"
    )
    .expect("Failed to create DONATED_AMOUNT metric");

    pub static ref WITHDRAWALS: IntCounter = register_int_counter!(
        "fundraiser_withdrawals_total",
        "Total number of committed withdrawals"
    )
    .expect("Failed to create WITHDRAWALS metric");

    pub static ref COMMIT_CONFLICTS: IntCounter = register_int_counter!(
        "fundraiser_commit_conflicts_total",
        "Total compare-and-set attempts that lost a race"
    )
    .expect("Failed to create COMMIT_CONFLICTS metric");

    pub static ref UNRECONCILED_TRANSFERS: IntCounter = register_int_counter!(
        "fundraiser_unreconciled_transfers_total",
        "Confirmed transfers whose local commit exhausted its retries"
    )
    .expect("Failed to create UNRECONCILED_TRANSFERS metric");

    pub static ref OPERATIONS_REJECTED: CounterVec = register_counter_vec!(
        "fundraiser_operations_rejected_total",
        "Total number of rejected treasury operations",
        &["reason"]
    )
    .expect("Failed to create OPERATIONS_REJECTED metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

#[cfg(feature = "metrics")]
pub fn record_fund_created() {
    FUNDS_CREATED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_donation(amount: u128) {
    DONATIONS.inc();
    DONATED_AMOUNT.inc_by(u64::try_from(amount).unwrap_or(u64::MAX));
}

#[cfg(feature = "metrics")]
pub fn record_withdrawal() {
    WITHDRAWALS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_commit_conflict() {
    COMMIT_CONFLICTS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_unreconciled_transfer() {
    UNRECONCILED_TRANSFERS.inc();
}

/// Record a rejected operation, labeled by error kind
#[cfg(feature = "metrics")]
pub fn record_rejected(reason: &str) {
    OPERATIONS_REJECTED.with_label_values(&[reason]).inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_fund_created() {}

#[cfg(not(feature = "metrics"))]
pub fn record_donation(_amount: u128) {}

#[cfg(not(feature = "metrics"))]
pub fn record_withdrawal() {}

#[cfg(not(feature = "metrics"))]
pub fn record_commit_conflict() {}

#[cfg(not(feature = "metrics"))]
pub fn record_unreconciled_transfer() {}

#[cfg(not(feature = "metrics"))]
pub fn record_rejected(_reason: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorders_run_with_or_without_feature() {
        record_fund_created();
        record_donation(60);
        record_donation(u128::MAX);
        record_withdrawal();
        record_commit_conflict();
        record_unreconciled_transfer();
        record_rejected("invalid_state");
    }
}
