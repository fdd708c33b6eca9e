//! Driving Ports (API - Inbound)
//!
//! The public operation surface of the fundraiser. The caller identity is
//! always an explicit argument; authorization is decided from it alone.

use crate::domain::{ConfigSnapshot, Receipt, ReconciliationReport};
use crate::error::FundraiserResult;
use async_trait::async_trait;
use fr_01_fund_registry::Fund;
use shared_types::{AccountAddress, AddressError, Amount, DurationNanos, FundId, Identity, NetworkMode};

/// Payout destination of a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Address(AccountAddress),
    /// 64-char hex text, checksum-verified before any transfer.
    Hex(String),
}

impl Destination {
    pub fn resolve(&self) -> Result<AccountAddress, AddressError> {
        match self {
            Destination::Address(address) => Ok(*address),
            Destination::Hex(text) => AccountAddress::from_hex(text),
        }
    }
}

impl From<AccountAddress> for Destination {
    fn from(address: AccountAddress) -> Self {
        Destination::Address(address)
    }
}

impl From<&str> for Destination {
    fn from(text: &str) -> Self {
        Destination::Hex(text.to_string())
    }
}

impl From<String> for Destination {
    fn from(text: String) -> Self {
        Destination::Hex(text)
    }
}

/// Primary Fundraiser API
///
/// Every operation except `initialize` fails with `NotInitialized` until
/// `initialize` has succeeded.
#[async_trait]
pub trait FundraiserApi: Send + Sync {
    // ---------------------------------------------------------------------
    // Administration
    // ---------------------------------------------------------------------

    /// Record the owner and network mode. Local mode also mints the test
    /// token supply to the treasury account.
    async fn initialize(
        &self,
        caller: &Identity,
        network_mode: NetworkMode,
    ) -> FundraiserResult<ConfigSnapshot>;

    async fn update_vault_address(
        &self,
        caller: &Identity,
        new_vault: Identity,
    ) -> FundraiserResult<ConfigSnapshot>;

    async fn update_fees(&self, caller: &Identity, new_fees: Amount)
        -> FundraiserResult<ConfigSnapshot>;

    async fn config(&self) -> FundraiserResult<ConfigSnapshot>;

    // ---------------------------------------------------------------------
    // Fund lifecycle
    // ---------------------------------------------------------------------

    /// Create a fund raised by `caller`.
    async fn create_new_fund(
        &self,
        caller: &Identity,
        target_amount: Amount,
        recipient: Identity,
        duration: DurationNanos,
    ) -> FundraiserResult<Fund>;

    /// Raiser-only. `expiry = created_at + new_duration`.
    async fn update_duration(
        &self,
        caller: &Identity,
        fund_id: FundId,
        new_duration: DurationNanos,
    ) -> FundraiserResult<Fund>;

    /// Raiser-only.
    async fn pause_fund(&self, caller: &Identity, fund_id: FundId) -> FundraiserResult<Fund>;

    /// Raiser-only.
    async fn restart_fund(&self, caller: &Identity, fund_id: FundId) -> FundraiserResult<Fund>;

    // ---------------------------------------------------------------------
    // Treasury
    // ---------------------------------------------------------------------

    /// Move `amount` from the donor's escrow account into the fund.
    ///
    /// The donor must have deposited at least `amount` to
    /// [`get_address_to_deposit`](FundraiserApi::get_address_to_deposit)
    /// beforehand.
    async fn donate(&self, donor: &Identity, fund_id: FundId, amount: Amount)
        -> FundraiserResult<Receipt>;

    /// Recipient-only. Pays out everything collected and not yet withdrawn.
    async fn withdraw_fund(
        &self,
        caller: &Identity,
        fund_id: FundId,
        destination: Destination,
    ) -> FundraiserResult<Receipt>;

    /// Local mode: tracked total. Main mode: live collecting-account balance.
    async fn check_raised(&self, fund_id: FundId) -> FundraiserResult<Amount>;

    /// Escrow account of `caller`.
    async fn get_address_to_deposit(&self, caller: &Identity) -> FundraiserResult<AccountAddress>;

    /// Collecting account of a fund.
    async fn fund_account(&self, fund_id: FundId) -> FundraiserResult<AccountAddress>;

    /// Compare tracked `available` with the collecting-account balance.
    async fn reconcile(&self, fund_id: FundId) -> FundraiserResult<ReconciliationReport>;

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    async fn get_fund(&self, fund_id: FundId) -> FundraiserResult<Fund>;

    /// Every fund in creation order.
    async fn list_funds(&self) -> FundraiserResult<Vec<Fund>>;
}
