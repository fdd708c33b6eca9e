//! Fund Treasury Service - Core business logic
//!
//! Implements the donate/withdraw protocol on top of the fund registry and a
//! ledger binding. Every state change made after a ledger await is a
//! compare-and-set against the snapshot read before it.

use crate::adapters::LedgerBindings;
use crate::domain::{
    ConfigSnapshot, ConfigState, Receipt, ReconciliationReport, TOKEN_NAME, TOKEN_SUPPLY,
    TOKEN_SYMBOL,
};
use crate::error::{FundraiserError, FundraiserResult};
use crate::metrics;
use crate::ports::inbound::{Destination, FundraiserApi};
use crate::ports::outbound::TimeSource;
use async_trait::async_trait;
use fr_01_fund_registry::{
    AuthorizationGuard, Fund, FundRegistryApi, FundingProgress, RegistryError,
};
use fr_02_treasury_ledger::{
    LedgerError, LedgerReceipt, SubaccountAddressDeriver, TreasuryLedgerClient,
};
use parking_lot::RwLock;
use shared_types::{AccountAddress, Amount, DurationNanos, FundId, Identity, NetworkMode};
use std::env;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Protocol configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Principal owning every escrow and collecting account
    pub treasury: Identity,
    /// Compare-and-set attempts before a post-transfer commit gives up
    pub max_commit_attempts: u32,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            treasury: Identity::from_text("fundraiser-treasury"),
            max_commit_attempts: 3,
        }
    }
}

impl ProtocolConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - FR_TREASURY_ID: Treasury principal (text)
    /// - FR_MAX_COMMIT_ATTEMPTS: Compare-and-set attempts per commit (>= 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            treasury: lookup("FR_TREASURY_ID")
                .filter(|t| !t.is_empty())
                .map(|t| Identity::from_text(&t))
                .unwrap_or(defaults.treasury),
            max_commit_attempts: lookup("FR_MAX_COMMIT_ATTEMPTS")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_commit_attempts),
        }
    }
}

fn rejected(operation: &'static str, err: FundraiserError) -> FundraiserError {
    metrics::record_rejected(err.kind());
    debug!(operation, kind = err.kind(), "[fr-03] Operation rejected: {}", err);
    err
}

/// Fund Treasury Service implementation
pub struct FundraiserService<R, C>
where
    R: FundRegistryApi,
    C: TimeSource,
{
    config: ProtocolConfig,
    registry: Arc<R>,
    clock: Arc<C>,
    bindings: LedgerBindings,
    deriver: SubaccountAddressDeriver,
    state: Arc<RwLock<ConfigState>>,
}

impl<R, C> FundraiserService<R, C>
where
    R: FundRegistryApi,
    C: TimeSource,
{
    pub fn new(
        registry: Arc<R>,
        bindings: LedgerBindings,
        clock: Arc<C>,
        config: ProtocolConfig,
    ) -> Self {
        let deriver = SubaccountAddressDeriver::new(config.treasury.clone());
        Self {
            config,
            registry,
            clock,
            bindings,
            deriver,
            state: Arc::new(RwLock::new(ConfigState::new())),
        }
    }

    pub fn deriver(&self) -> &SubaccountAddressDeriver {
        &self.deriver
    }

    fn network_mode(&self) -> FundraiserResult<NetworkMode> {
        self.state.read().network_mode()
    }

    /// Binding for the configured mode. The config lock is released on return.
    fn ledger(&self) -> FundraiserResult<Arc<dyn TreasuryLedgerClient>> {
        let mode = self.network_mode()?;
        Ok(self.bindings.select(mode))
    }

    fn load(&self, id: FundId) -> FundraiserResult<Fund> {
        self.registry
            .get(id)?
            .ok_or(FundraiserError::NotFound { id })
    }

    fn snapshot(&self) -> FundraiserResult<ConfigSnapshot> {
        self.network_mode()?;
        let next_id = self.registry.next_id()?;
        self.state.read().snapshot(next_id)
    }

    /// Commit the effect of a confirmed transfer.
    ///
    /// Any failure here leaves value moved on the ledger with no local
    /// record of it, so every returned error carries the receipt.
    fn commit_after_transfer<F>(
        &self,
        snapshot: Fund,
        transfer: &LedgerReceipt,
        operation: &'static str,
        apply: F,
    ) -> FundraiserResult<(Fund, u32)>
    where
        F: Fn(&Fund) -> Option<Fund>,
    {
        let id = snapshot.id;
        self.try_commit(snapshot, operation, apply).map_err(|err| {
            metrics::record_unreconciled_transfer();
            error!(
                fund_id = id,
                correlation_id = %transfer.correlation_id,
                block_index = transfer.block_index,
                amount = %transfer.amount,
                "[fr-03] ❌ {} transferred on the ledger but was not recorded, manual reconciliation required: {}",
                operation,
                err
            );
            let receipt = Box::new(transfer.clone());
            match err {
                FundraiserError::Conflict { attempts, .. } => FundraiserError::Conflict {
                    id,
                    attempts,
                    receipt: Some(receipt),
                },
                cause => FundraiserError::UnrecordedTransfer {
                    id,
                    receipt,
                    cause: Box::new(cause),
                },
            }
        })
    }

    fn try_commit<F>(
        &self,
        snapshot: Fund,
        operation: &'static str,
        apply: F,
    ) -> FundraiserResult<(Fund, u32)>
    where
        F: Fn(&Fund) -> Option<Fund>,
    {
        let id = snapshot.id;
        let max_attempts = self.config.max_commit_attempts.max(1);
        let mut expected = snapshot;

        for attempt in 1..=max_attempts {
            let candidate = apply(&expected).ok_or_else(|| FundraiserError::InvariantViolation {
                reason: format!(
                    "{} does not fit fund {} (total {}, available {})",
                    operation, id, expected.total_amount_funded, expected.available
                ),
            })?;

            match self.registry.compare_and_set(id, &expected, candidate) {
                Ok(committed) => return Ok((committed, attempt)),
                Err(RegistryError::Conflict {
                    actual_revision, ..
                }) => {
                    metrics::record_commit_conflict();
                    warn!(
                        fund_id = id,
                        attempt,
                        expected_revision = expected.revision,
                        actual_revision,
                        "[fr-03] ⚠️ {} commit conflicted, reloading",
                        operation
                    );
                    expected = self.registry.get(id)?.ok_or_else(|| {
                        FundraiserError::InvariantViolation {
                            reason: format!("fund {} disappeared during {}", id, operation),
                        }
                    })?;
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(FundraiserError::Conflict {
            id,
            attempts: max_attempts,
            receipt: None,
        })
    }

    async fn process_donation(
        &self,
        donor: &Identity,
        fund_id: FundId,
        amount: Amount,
    ) -> FundraiserResult<Receipt> {
        let ledger = self.ledger()?;
        let snapshot = self.load(fund_id)?;

        if amount == 0 {
            return Err(FundraiserError::InvalidState {
                id: fund_id,
                reason: "donation amount must be positive".to_string(),
            });
        }
        let now = self.clock.now();
        if !snapshot.accepts_donations_at(now) {
            let reason = if snapshot.active {
                format!("fund expired at {}, now {}", snapshot.expiry, now)
            } else {
                "fund is paused".to_string()
            };
            return Err(FundraiserError::InvalidState { id: fund_id, reason });
        }

        let escrow = self.deriver.escrow_account(donor);
        let balance = match ledger.balance_of(escrow).await {
            Ok(balance) => balance,
            Err(e) => {
                warn!(fund_id, "[fr-03] Escrow balance of {} unavailable: {}", escrow, e);
                0
            }
        };
        if balance == 0 || balance < amount {
            return Err(FundraiserError::SubaccountNotFunded {
                account: escrow,
                balance,
                requested: amount,
            });
        }

        let collecting = self.deriver.fund_account(fund_id);
        let transfer = ledger
            .transfer(escrow, collecting, amount)
            .await
            .map_err(|e| {
                warn!(fund_id, "[fr-03] Donation transfer failed: {}", e);
                FundraiserError::LedgerTransferFailed(e)
            })?;

        let (fund, commit_attempts) =
            self.commit_after_transfer(snapshot, &transfer, "donation", |current| {
                current.with_donation(amount)
            })?;

        metrics::record_donation(amount);
        info!(
            fund_id,
            amount = %amount,
            total = %fund.total_amount_funded,
            correlation_id = %transfer.correlation_id,
            commit_attempts,
            "[fr-03] 💰 Donation committed"
        );

        Ok(Receipt {
            correlation_id: transfer.correlation_id,
            fund,
            transfer,
            commit_attempts,
        })
    }

    async fn process_withdrawal(
        &self,
        caller: &Identity,
        fund_id: FundId,
        destination: Destination,
    ) -> FundraiserResult<Receipt> {
        let ledger = self.ledger()?;
        let snapshot = self.load(fund_id)?;
        AuthorizationGuard::require_recipient(&snapshot, caller, "withdraw from")?;

        match snapshot.progress() {
            FundingProgress::Open => {
                return Err(FundraiserError::TargetNotReached {
                    id: fund_id,
                    target: snapshot.amount,
                    raised: snapshot.total_amount_funded,
                });
            }
            FundingProgress::Withdrawn => {
                return Err(FundraiserError::InvalidState {
                    id: fund_id,
                    reason: "nothing available to withdraw".to_string(),
                });
            }
            FundingProgress::TargetReached => {}
        }
        let to = destination.resolve()?;

        let amount = snapshot.available;
        let collecting = self.deriver.fund_account(fund_id);
        let transfer = ledger
            .transfer(collecting, to, amount)
            .await
            .map_err(|e| {
                warn!(fund_id, "[fr-03] Withdrawal transfer failed: {}", e);
                FundraiserError::LedgerTransferFailed(e)
            })?;

        let (fund, commit_attempts) =
            self.commit_after_transfer(snapshot, &transfer, "withdrawal", |current| {
                current.with_withdrawal(amount)
            })?;

        metrics::record_withdrawal();
        info!(
            fund_id,
            amount = %amount,
            correlation_id = %transfer.correlation_id,
            "[fr-03] 🏦 Withdrawal to {} committed",
            to
        );

        Ok(Receipt {
            correlation_id: transfer.correlation_id,
            fund,
            transfer,
            commit_attempts,
        })
    }
}

#[async_trait]
impl<R, C> FundraiserApi for FundraiserService<R, C>
where
    R: FundRegistryApi + 'static,
    C: TimeSource + 'static,
{
    async fn initialize(
        &self,
        caller: &Identity,
        network_mode: NetworkMode,
    ) -> FundraiserResult<ConfigSnapshot> {
        self.state.write().initialize(caller, network_mode)?;

        if network_mode == NetworkMode::Local {
            match self.bindings.token_admin() {
                Some(admin) => {
                    let holder = self.deriver.treasury_account();
                    match admin
                        .initialize_supply(TOKEN_NAME, holder, TOKEN_SYMBOL, TOKEN_SUPPLY)
                        .await
                    {
                        Ok(()) => {}
                        Err(LedgerError::SupplyAlreadyInitialized) => {
                            debug!("[fr-03] Local token supply already minted");
                        }
                        Err(e) => {
                            self.state.write().reset();
                            error!("[fr-03] ❌ Local token bootstrap failed: {}", e);
                            return Err(FundraiserError::LedgerUnavailable(e));
                        }
                    }
                }
                None => warn!("[fr-03] No token administration bound, skipping local mint"),
            }
        }

        info!(owner = %caller, mode = %network_mode, "[fr-03] 🚀 Fundraiser initialized");
        self.snapshot()
    }

    async fn update_vault_address(
        &self,
        caller: &Identity,
        new_vault: Identity,
    ) -> FundraiserResult<ConfigSnapshot> {
        self.state.write().update_vault(caller, new_vault)?;
        info!("[fr-03] Vault address updated");
        self.snapshot()
    }

    async fn update_fees(
        &self,
        caller: &Identity,
        new_fees: Amount,
    ) -> FundraiserResult<ConfigSnapshot> {
        self.state.write().update_fees(caller, new_fees)?;
        info!(fees = %new_fees, "[fr-03] Fees updated");
        self.snapshot()
    }

    async fn config(&self) -> FundraiserResult<ConfigSnapshot> {
        self.snapshot()
    }

    async fn create_new_fund(
        &self,
        caller: &Identity,
        target_amount: Amount,
        recipient: Identity,
        duration: DurationNanos,
    ) -> FundraiserResult<Fund> {
        self.network_mode()?;
        let now = self.clock.now();
        let fund = self
            .registry
            .create(target_amount, recipient, duration, caller.clone(), now)?;
        metrics::record_fund_created();
        Ok(fund)
    }

    async fn update_duration(
        &self,
        caller: &Identity,
        fund_id: FundId,
        new_duration: DurationNanos,
    ) -> FundraiserResult<Fund> {
        self.network_mode()?;
        Ok(self.registry.set_expiry(fund_id, caller, new_duration)?)
    }

    async fn pause_fund(&self, caller: &Identity, fund_id: FundId) -> FundraiserResult<Fund> {
        self.network_mode()?;
        Ok(self.registry.set_active(fund_id, caller, false)?)
    }

    async fn restart_fund(&self, caller: &Identity, fund_id: FundId) -> FundraiserResult<Fund> {
        self.network_mode()?;
        Ok(self.registry.set_active(fund_id, caller, true)?)
    }

    async fn donate(
        &self,
        donor: &Identity,
        fund_id: FundId,
        amount: Amount,
    ) -> FundraiserResult<Receipt> {
        self.process_donation(donor, fund_id, amount)
            .await
            .map_err(|e| rejected("donate", e))
    }

    async fn withdraw_fund(
        &self,
        caller: &Identity,
        fund_id: FundId,
        destination: Destination,
    ) -> FundraiserResult<Receipt> {
        self.process_withdrawal(caller, fund_id, destination)
            .await
            .map_err(|e| rejected("withdraw", e))
    }

    async fn check_raised(&self, fund_id: FundId) -> FundraiserResult<Amount> {
        let mode = self.network_mode()?;
        let fund = self.load(fund_id)?;

        match mode {
            NetworkMode::Local => Ok(fund.total_amount_funded),
            NetworkMode::Main => self
                .bindings
                .select(mode)
                .balance_of(self.deriver.fund_account(fund_id))
                .await
                .map_err(FundraiserError::LedgerUnavailable),
        }
    }

    async fn get_address_to_deposit(&self, caller: &Identity) -> FundraiserResult<AccountAddress> {
        self.network_mode()?;
        Ok(self.deriver.escrow_account(caller))
    }

    async fn fund_account(&self, fund_id: FundId) -> FundraiserResult<AccountAddress> {
        self.network_mode()?;
        self.load(fund_id)?;
        Ok(self.deriver.fund_account(fund_id))
    }

    async fn reconcile(&self, fund_id: FundId) -> FundraiserResult<ReconciliationReport> {
        let ledger = self.ledger()?;
        let fund = self.load(fund_id)?;
        let balance = ledger
            .balance_of(self.deriver.fund_account(fund_id))
            .await
            .map_err(FundraiserError::LedgerUnavailable)?;

        let report = ReconciliationReport::new(fund_id, fund.available, balance);
        if report.is_balanced() {
            debug!(fund_id, "[fr-03] Fund balanced against ledger");
        } else {
            warn!(
                fund_id,
                tracked = %report.tracked_available,
                ledger = %report.ledger_balance,
                "[fr-03] ⚠️ Fund out of balance: {:?}",
                report.status
            );
        }
        Ok(report)
    }

    async fn get_fund(&self, fund_id: FundId) -> FundraiserResult<Fund> {
        self.network_mode()?;
        self.load(fund_id)
    }

    async fn list_funds(&self) -> FundraiserResult<Vec<Fund>> {
        self.network_mode()?;
        Ok(self.registry.list()?)
    }
}
