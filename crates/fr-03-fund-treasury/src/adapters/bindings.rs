//! Ledger bindings selected by network mode.

use fr_02_treasury_ledger::{LocalTokenLedger, TokenAdministration, TreasuryLedgerClient};
use shared_types::NetworkMode;
use std::sync::Arc;

/// The two ledger implementations a fundraiser can run against.
#[derive(Clone)]
pub struct LedgerBindings {
    local: Arc<dyn TreasuryLedgerClient>,
    main: Arc<dyn TreasuryLedgerClient>,
    token_admin: Option<Arc<dyn TokenAdministration>>,
}

impl LedgerBindings {
    /// Bindings without token administration; local-mode `initialize`
    /// then skips minting.
    pub fn new(local: Arc<dyn TreasuryLedgerClient>, main: Arc<dyn TreasuryLedgerClient>) -> Self {
        Self {
            local,
            main,
            token_admin: None,
        }
    }

    /// Local mode backed by an in-process test token.
    pub fn with_local_token(token: Arc<LocalTokenLedger>, main: Arc<dyn TreasuryLedgerClient>) -> Self {
        let local: Arc<dyn TreasuryLedgerClient> = token.clone();
        let admin: Arc<dyn TokenAdministration> = token;
        Self::new(local, main).with_token_admin(admin)
    }

    pub fn with_token_admin(mut self, admin: Arc<dyn TokenAdministration>) -> Self {
        self.token_admin = Some(admin);
        self
    }

    pub fn select(&self, mode: NetworkMode) -> Arc<dyn TreasuryLedgerClient> {
        match mode {
            NetworkMode::Local => Arc::clone(&self.local),
            NetworkMode::Main => Arc::clone(&self.main),
        }
    }

    pub fn token_admin(&self) -> Option<Arc<dyn TokenAdministration>> {
        self.token_admin.clone()
    }
}
