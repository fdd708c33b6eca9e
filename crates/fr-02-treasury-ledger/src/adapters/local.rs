//! # Local Token Ledger
//!
//! In-process token used in local mode and tests. Balances live in memory
//! behind a `parking_lot::RwLock` that is released before every return, so
//! callers may interleave freely across awaits.

use crate::error::{LedgerError, LedgerResult};
use crate::ports::outbound::{LedgerReceipt, TokenAdministration, TokenMetadata, TreasuryLedgerClient};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{AccountAddress, Amount};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Amount paid by one faucet call.
pub const FAUCET_AMOUNT: Amount = 100;

#[derive(Default)]
struct LocalLedgerState {
    balances: HashMap<AccountAddress, Amount>,
    metadata: Option<TokenMetadata>,
    next_block_index: u64,
}

impl LocalLedgerState {
    fn balance(&self, account: &AccountAddress) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn apply_transfer(
        &mut self,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> LedgerResult<LedgerReceipt> {
        let balance = self.balance(&from);
        if balance < amount {
            return Err(LedgerError::InsufficientFunds {
                account: from,
                balance,
                requested: amount,
            });
        }

        if from != to {
            let credited = self.balance(&to).checked_add(amount).ok_or_else(|| {
                LedgerError::Rejected {
                    reason: format!("balance overflow crediting {}", to),
                }
            })?;
            self.balances.insert(from, balance - amount);
            self.balances.insert(to, credited);
        }

        let block_index = self.next_block_index;
        self.next_block_index += 1;

        Ok(LedgerReceipt {
            correlation_id: Uuid::new_v4(),
            block_index,
            from,
            to,
            amount,
        })
    }
}

/// In-memory test token.
#[derive(Default)]
pub struct LocalTokenLedger {
    state: RwLock<LocalLedgerState>,
}

impl LocalTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all balances. Equals `total_supply` once initialized.
    pub fn circulating(&self) -> Amount {
        self.state.read().balances.values().sum()
    }

    pub fn name(&self) -> Option<String> {
        self.state.read().metadata.as_ref().map(|m| m.name.clone())
    }

    pub fn symbol(&self) -> Option<String> {
        self.state.read().metadata.as_ref().map(|m| m.symbol.clone())
    }

    /// Zero until the supply is minted.
    pub fn total_supply(&self) -> Amount {
        self.state
            .read()
            .metadata
            .as_ref()
            .map_or(0, |m| m.total_supply)
    }
}

#[async_trait]
impl TreasuryLedgerClient for LocalTokenLedger {
    async fn transfer(
        &self,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> LedgerResult<LedgerReceipt> {
        let receipt = self.state.write().apply_transfer(from, to, amount)?;
        debug!(
            block_index = receipt.block_index,
            amount = %amount,
            "[fr-02] Local transfer {} -> {}",
            from,
            to
        );
        Ok(receipt)
    }

    async fn balance_of(&self, account: AccountAddress) -> LedgerResult<Amount> {
        Ok(self.state.read().balance(&account))
    }
}

#[async_trait]
impl TokenAdministration for LocalTokenLedger {
    async fn initialize_supply(
        &self,
        name: &str,
        holder: AccountAddress,
        symbol: &str,
        total_supply: Amount,
    ) -> LedgerResult<()> {
        let mut state = self.state.write();
        if state.metadata.is_some() {
            return Err(LedgerError::SupplyAlreadyInitialized);
        }

        state.balances.insert(holder, total_supply);
        state.metadata = Some(TokenMetadata {
            name: name.to_string(),
            symbol: symbol.to_string(),
            total_supply,
            holder,
        });

        info!(
            name,
            symbol,
            total_supply = %total_supply,
            "[fr-02] 🪙 Local token supply minted to {}",
            holder
        );
        Ok(())
    }

    async fn faucet(&self, account: AccountAddress) -> LedgerResult<Amount> {
        let mut state = self.state.write();
        let holder = state
            .metadata
            .as_ref()
            .map(|m| m.holder)
            .ok_or(LedgerError::SupplyNotInitialized)?;

        if state.balance(&account) > 0 {
            debug!("[fr-02] Faucet skipped, {} already funded", account);
            return Ok(0);
        }

        state.apply_transfer(holder, account, FAUCET_AMOUNT)?;
        info!("[fr-02] 🚰 Faucet paid {} to {}", FAUCET_AMOUNT, account);
        Ok(FAUCET_AMOUNT)
    }

    fn metadata(&self) -> Option<TokenMetadata> {
        self.state.read().metadata.clone()
    }
}
