//! # Inbound Port (Driving API)
//!
//! Operations the fund registry exposes to the treasury protocol.

use crate::domain::entities::Fund;
use crate::domain::errors::RegistryResult;
use shared_types::{Amount, DurationNanos, FundId, Identity, Timestamp};

/// Primary Fund Registry API.
///
/// Every method is synchronous: none of them suspends, so a caller that
/// needs to await an external service must read a snapshot first and commit
/// afterwards through [`compare_and_set`](FundRegistryApi::compare_and_set).
pub trait FundRegistryApi: Send + Sync {
    /// Allocate the next id and persist a fresh, active, unfunded fund.
    fn create(
        &self,
        target_amount: Amount,
        recipient: Identity,
        duration: DurationNanos,
        raiser: Identity,
        now: Timestamp,
    ) -> RegistryResult<Fund>;

    /// Load a fund snapshot.
    fn get(&self, id: FundId) -> RegistryResult<Option<Fund>>;

    /// Commit `new` only if the stored record still equals `expected`.
    ///
    /// # Returns
    /// * The committed record, with `revision = expected.revision + 1`
    /// * `Conflict` without touching storage if the record moved on
    fn compare_and_set(&self, id: FundId, expected: &Fund, new: Fund) -> RegistryResult<Fund>;

    /// Raiser-only toggle of the `active` flag.
    fn set_active(&self, id: FundId, caller: &Identity, active: bool) -> RegistryResult<Fund>;

    /// Raiser-only recompute of `expiry = created_at + new_duration`.
    fn set_expiry(
        &self,
        id: FundId,
        caller: &Identity,
        new_duration: DurationNanos,
    ) -> RegistryResult<Fund>;

    /// All funds in insertion order.
    fn list(&self) -> RegistryResult<Vec<Fund>>;

    /// The id the next `create` will assign.
    fn next_id(&self) -> RegistryResult<FundId>;
}
