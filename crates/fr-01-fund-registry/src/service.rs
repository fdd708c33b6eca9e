//! # Fund Registry Service
//!
//! Owns the durable fund map. All access to the store goes through one
//! `parking_lot::RwLock`; every method runs to completion without awaiting,
//! so the lock is never held across a suspension point.

use crate::adapters::serializer::BincodeFundSerializer;
use crate::domain::entities::Fund;
use crate::domain::errors::{RegistryError, RegistryResult};
use crate::domain::guard::AuthorizationGuard;
use crate::domain::keys::{decode_counter, encode_counter, fund_key, FUND_PREFIX, NEXT_ID_KEY};
use crate::ports::inbound::FundRegistryApi;
use crate::ports::outbound::{BatchOperation, FundSerializer, KeyValueStore};
use parking_lot::RwLock;
use shared_types::{Amount, DurationNanos, FundId, Identity, Timestamp};
use tracing::{debug, error, info};

/// Fund Registry implementation
pub struct FundRegistry<S, Z = BincodeFundSerializer>
where
    S: KeyValueStore,
    Z: FundSerializer,
{
    store: RwLock<S>,
    serializer: Z,
}

impl<S: KeyValueStore> FundRegistry<S, BincodeFundSerializer> {
    /// Create a registry over `store` using bincode records.
    pub fn new(store: S) -> Self {
        Self::with_serializer(store, BincodeFundSerializer)
    }
}

impl<S, Z> FundRegistry<S, Z>
where
    S: KeyValueStore,
    Z: FundSerializer,
{
    pub fn with_serializer(store: S, serializer: Z) -> Self {
        Self {
            store: RwLock::new(store),
            serializer,
        }
    }

    fn load(&self, store: &S, id: FundId) -> RegistryResult<Option<Fund>> {
        match store.get(&fund_key(id))? {
            Some(bytes) => Ok(Some(self.serializer.deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn read_counter(store: &S) -> RegistryResult<FundId> {
        match store.get(NEXT_ID_KEY)? {
            Some(bytes) => decode_counter(&bytes).ok_or_else(|| RegistryError::InvariantViolation {
                reason: format!("next_id counter has {} bytes, expected 8", bytes.len()),
            }),
            None => Ok(0),
        }
    }

    /// Read-modify-write under a single write lock.
    ///
    /// `update` sees the current record and returns the candidate to store;
    /// it runs synchronously, so no other call can interleave.
    fn update_with<F>(&self, id: FundId, update: F) -> RegistryResult<Fund>
    where
        F: FnOnce(&Fund) -> RegistryResult<Fund>,
    {
        let mut store = self.store.write();
        let current = self
            .load(&store, id)?
            .ok_or(RegistryError::NotFound { id })?;

        let mut next = update(&current)?;
        next.revision = current.revision + 1;

        let bytes = self.serializer.serialize(&next)?;
        store.put(&fund_key(id), &bytes)?;
        Ok(next)
    }
}

impl<S, Z> FundRegistryApi for FundRegistry<S, Z>
where
    S: KeyValueStore,
    Z: FundSerializer,
{
    fn create(
        &self,
        target_amount: Amount,
        recipient: Identity,
        duration: DurationNanos,
        raiser: Identity,
        now: Timestamp,
    ) -> RegistryResult<Fund> {
        let mut store = self.store.write();

        let id = Self::read_counter(&store)?;
        if store.exists(&fund_key(id))? {
            error!("[fr-01] ❌ next_id {} already names a stored fund", id);
            return Err(RegistryError::InvariantViolation {
                reason: format!("next_id {} already names a stored fund", id),
            });
        }
        let next_id = id.checked_add(1).ok_or_else(|| RegistryError::InvariantViolation {
            reason: "fund id space exhausted".to_string(),
        })?;

        let fund = Fund::new(id, target_amount, recipient, duration, raiser, now);
        let bytes = self.serializer.serialize(&fund)?;

        // Record and counter land together or not at all
        store.atomic_batch_write(vec![
            BatchOperation::put(fund_key(id), bytes),
            BatchOperation::put(NEXT_ID_KEY.to_vec(), encode_counter(next_id).to_vec()),
        ])?;

        info!(
            fund_id = id,
            target = %fund.amount,
            expiry = fund.expiry,
            "[fr-01] 🆕 Fund created"
        );
        Ok(fund)
    }

    fn get(&self, id: FundId) -> RegistryResult<Option<Fund>> {
        let store = self.store.read();
        self.load(&store, id)
    }

    fn compare_and_set(&self, id: FundId, expected: &Fund, new: Fund) -> RegistryResult<Fund> {
        let mut store = self.store.write();
        let current = self
            .load(&store, id)?
            .ok_or(RegistryError::NotFound { id })?;

        if &current != expected {
            debug!(
                fund_id = id,
                expected_revision = expected.revision,
                actual_revision = current.revision,
                "[fr-01] ⚠️ compare-and-set lost a race"
            );
            return Err(RegistryError::Conflict {
                id,
                expected_revision: expected.revision,
                actual_revision: current.revision,
            });
        }

        let mut committed = new;
        committed.id = id;
        committed.revision = current.revision + 1;

        let bytes = self.serializer.serialize(&committed)?;
        store.put(&fund_key(id), &bytes)?;

        debug!(
            fund_id = id,
            revision = committed.revision,
            "[fr-01] Fund committed"
        );
        Ok(committed)
    }

    fn set_active(&self, id: FundId, caller: &Identity, active: bool) -> RegistryResult<Fund> {
        let operation = if active { "restart" } else { "pause" };
        let fund = self.update_with(id, |current| {
            AuthorizationGuard::require_raiser(current, caller, operation)?;
            Ok(current.with_active(active))
        })?;

        info!(fund_id = id, active, "[fr-01] Fund {}", operation);
        Ok(fund)
    }

    fn set_expiry(
        &self,
        id: FundId,
        caller: &Identity,
        new_duration: DurationNanos,
    ) -> RegistryResult<Fund> {
        let fund = self.update_with(id, |current| {
            AuthorizationGuard::require_raiser(current, caller, "update the duration of")?;
            Ok(current.with_duration(new_duration))
        })?;

        info!(fund_id = id, expiry = fund.expiry, "[fr-01] Fund duration updated");
        Ok(fund)
    }

    fn list(&self) -> RegistryResult<Vec<Fund>> {
        let store = self.store.read();
        store
            .prefix_scan(FUND_PREFIX)?
            .into_iter()
            .map(|(_, bytes)| self.serializer.deserialize(&bytes).map_err(Into::into))
            .collect()
    }

    fn next_id(&self) -> RegistryResult<FundId> {
        let store = self.store.read();
        Self::read_counter(&store)
    }
}
