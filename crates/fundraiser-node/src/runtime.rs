//! # Runtime Wiring
//!
//! Builds the treasury service from a [`FundraiserConfig`].

use crate::config::FundraiserConfig;
use crate::store::NodeStore;
use anyhow::{Context, Result};
use fr_01_fund_registry::FundRegistry;
use fr_02_treasury_ledger::{JsonRpcLedgerClient, LocalTokenLedger, TreasuryLedgerClient};
use fr_03_fund_treasury::{
    ConfigSnapshot, FundraiserApi, FundraiserService, LedgerBindings, SystemTimeSource,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Treasury service as wired by the node.
pub type NodeService = FundraiserService<FundRegistry<NodeStore>, SystemTimeSource>;

/// The fundraiser process.
pub struct FundraiserNode {
    config: FundraiserConfig,
    service: Arc<NodeService>,
    token: Arc<LocalTokenLedger>,
}

impl FundraiserNode {
    /// Open the store and wire both ledger bindings. No ledger is contacted.
    pub fn build(config: FundraiserConfig) -> Result<Self> {
        let store = NodeStore::open(&config.store).context("failed to open fund store")?;
        let registry = Arc::new(FundRegistry::new(store));

        let token = Arc::new(LocalTokenLedger::new());
        let remote: Arc<dyn TreasuryLedgerClient> = Arc::new(
            JsonRpcLedgerClient::new(config.ledger.clone())
                .context("failed to build JSON-RPC ledger client")?,
        );
        let bindings = LedgerBindings::with_local_token(Arc::clone(&token), remote);

        let service = Arc::new(FundraiserService::new(
            registry,
            bindings,
            Arc::new(SystemTimeSource),
            config.protocol.clone(),
        ));

        Ok(Self {
            config,
            service,
            token,
        })
    }

    /// Initialize the treasury as the configured owner.
    ///
    /// Returns `None` when no owner is configured.
    pub async fn bootstrap(&self) -> Result<Option<ConfigSnapshot>> {
        let Some(owner) = &self.config.owner else {
            warn!("[fundraiser] FR_OWNER not set, treasury left uninitialized");
            return Ok(None);
        };

        let snapshot = self
            .service
            .initialize(owner, self.config.network_mode)
            .await
            .context("failed to initialize treasury")?;
        let funds = self.service.list_funds().await?.len();

        info!(
            mode = %snapshot.network_mode,
            next_id = snapshot.next_id,
            funds,
            treasury = %self.service.deriver().treasury_account(),
            "[fundraiser] ✅ Treasury ready"
        );
        Ok(Some(snapshot))
    }

    pub fn service(&self) -> Arc<NodeService> {
        Arc::clone(&self.service)
    }

    /// The in-process token backing local mode.
    pub fn local_token(&self) -> Arc<LocalTokenLedger> {
        Arc::clone(&self.token)
    }
}
