//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The treasury protocol suspends on every call below. Implementations must
//! not assume any ordering with respect to other in-flight calls.

use crate::error::LedgerResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{AccountAddress, Amount};
use uuid::Uuid;

/// Proof of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReceipt {
    /// Correlates the transfer with treasury logs.
    pub correlation_id: Uuid,
    /// Position of the transfer in the ledger's history.
    pub block_index: u64,
    pub from: AccountAddress,
    pub to: AccountAddress,
    pub amount: Amount,
}

/// Value-transfer service backing the treasury.
#[async_trait]
pub trait TreasuryLedgerClient: Send + Sync {
    /// Move `amount` from `from` to `to`.
    ///
    /// On error no value has moved.
    async fn transfer(
        &self,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> LedgerResult<LedgerReceipt>;

    /// Current balance of `account`; zero for accounts never touched.
    async fn balance_of(&self, account: AccountAddress) -> LedgerResult<Amount>;
}

/// Token metadata fixed by `initialize_supply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub total_supply: Amount,
    pub holder: AccountAddress,
}

/// Administration of a locally minted test token.
#[async_trait]
pub trait TokenAdministration: Send + Sync {
    /// Mint `total_supply` to `holder`. Succeeds once per token.
    async fn initialize_supply(
        &self,
        name: &str,
        holder: AccountAddress,
        symbol: &str,
        total_supply: Amount,
    ) -> LedgerResult<()>;

    /// Pay a fixed amount from the supply holder to an empty account.
    ///
    /// Returns the amount paid, zero if `account` already held a balance.
    async fn faucet(&self, account: AccountAddress) -> LedgerResult<Amount>;

    fn metadata(&self) -> Option<TokenMetadata>;
}
