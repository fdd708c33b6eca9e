//! Shared fixtures for the integration flows.

use async_trait::async_trait;
use fr_01_fund_registry::{FundRegistry, FundRegistryApi, InMemoryKVStore};
use fr_02_treasury_ledger::{
    LedgerReceipt, LedgerResult, LocalTokenLedger, TokenAdministration, TreasuryLedgerClient,
};
use fr_03_fund_treasury::{
    FundraiserApi, FundraiserService, LedgerBindings, ProtocolConfig, TimeSource,
};
use shared_types::{AccountAddress, Amount, Identity, NetworkMode, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const START: Timestamp = 1_700_000_000_000_000_000;

pub fn owner() -> Identity {
    Identity::from_text("owner")
}

pub fn raiser() -> Identity {
    Identity::from_text("raiser-A")
}

pub fn recipient() -> Identity {
    Identity::from_text("recipient-R")
}

pub fn donor(name: &str) -> Identity {
    Identity::from_text(name)
}

/// Clock moved only by the test.
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn at(now: Timestamp) -> Self {
        Self(AtomicU64::new(now))
    }

    pub fn advance(&self, by: u64) {
        self.0.fetch_add(by, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.0.load(Ordering::SeqCst)
    }
}

/// Local token that suspends before answering, so concurrent callers
/// interleave at every ledger await.
pub struct YieldingLedger(pub Arc<LocalTokenLedger>);

#[async_trait]
impl TreasuryLedgerClient for YieldingLedger {
    async fn transfer(
        &self,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> LedgerResult<LedgerReceipt> {
        tokio::task::yield_now().await;
        let receipt = self.0.transfer(from, to, amount).await;
        tokio::task::yield_now().await;
        receipt
    }

    async fn balance_of(&self, account: AccountAddress) -> LedgerResult<Amount> {
        tokio::task::yield_now().await;
        self.0.balance_of(account).await
    }
}

pub struct Fixture<R: FundRegistryApi> {
    pub service: FundraiserService<R, ManualClock>,
    pub token: Arc<LocalTokenLedger>,
    pub clock: Arc<ManualClock>,
}

/// Local-mode service over `registry`, initialized by [`owner`].
pub async fn local_fixture<R>(registry: R, yielding: bool) -> Fixture<R>
where
    R: FundRegistryApi + 'static,
{
    let token = Arc::new(LocalTokenLedger::new());
    let local: Arc<dyn TreasuryLedgerClient> = if yielding {
        Arc::new(YieldingLedger(Arc::clone(&token)))
    } else {
        token.clone()
    };
    let main: Arc<dyn TreasuryLedgerClient> = token.clone();
    let admin: Arc<dyn TokenAdministration> = token.clone();

    let clock = Arc::new(ManualClock::at(START));
    let service = FundraiserService::new(
        Arc::new(registry),
        LedgerBindings::new(local, main).with_token_admin(admin),
        Arc::clone(&clock),
        ProtocolConfig::default(),
    );
    service
        .initialize(&owner(), NetworkMode::Local)
        .await
        .expect("initialize");

    Fixture {
        service,
        token,
        clock,
    }
}

pub async fn memory_fixture(yielding: bool) -> Fixture<FundRegistry<InMemoryKVStore>> {
    local_fixture(FundRegistry::new(InMemoryKVStore::new()), yielding).await
}

impl<R: FundRegistryApi + 'static> Fixture<R> {
    /// Deposit into `who`'s escrow from the treasury supply.
    pub async fn prefund(&self, who: &Identity, amount: Amount) {
        let escrow = self
            .service
            .get_address_to_deposit(who)
            .await
            .expect("escrow address");
        self.token
            .transfer(self.service.deriver().treasury_account(), escrow, amount)
            .await
            .expect("prefund transfer");
    }

    pub async fn balance(&self, account: AccountAddress) -> Amount {
        self.token.balance_of(account).await.expect("balance")
    }
}
