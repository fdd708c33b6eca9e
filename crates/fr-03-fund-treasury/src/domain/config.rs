//! # Administrative Configuration
//!
//! Process-wide settings fixed by `initialize` and edited only by the owner.
//! The id counter is not held here: it lives next to the fund records so a
//! restart never reuses ids.

use crate::error::{FundraiserError, FundraiserResult};
use fr_01_fund_registry::AuthorizationGuard;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, FundId, Identity, NetworkMode};

/// Name of the test token minted in local mode.
pub const TOKEN_NAME: &str = "ICToken";
/// Symbol of the test token minted in local mode.
pub const TOKEN_SYMBOL: &str = "ICT";
/// Supply minted to the treasury account in local mode.
pub const TOKEN_SUPPLY: Amount = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct AdminSettings {
    owner: Identity,
    vault: Identity,
    fees: Amount,
    network_mode: NetworkMode,
}

/// Read-only view of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub owner: Identity,
    pub vault: Identity,
    /// Reserved; transfer math ignores it.
    pub fees: Amount,
    pub network_mode: NetworkMode,
    /// Id the next created fund receives.
    pub next_id: FundId,
}

/// Singleton configuration with a guarded lifecycle.
#[derive(Debug, Default)]
pub struct ConfigState {
    settings: Option<AdminSettings>,
}

impl ConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `owner = vault = caller`, `fees = 0`. Succeeds once.
    pub fn initialize(&mut self, caller: &Identity, network_mode: NetworkMode) -> FundraiserResult<()> {
        if self.settings.is_some() {
            return Err(FundraiserError::AlreadyInitialized);
        }
        self.settings = Some(AdminSettings {
            owner: caller.clone(),
            vault: caller.clone(),
            fees: 0,
            network_mode,
        });
        Ok(())
    }

    /// Undo an `initialize` whose follow-up bootstrap failed.
    pub(crate) fn reset(&mut self) {
        self.settings = None;
    }

    pub fn network_mode(&self) -> FundraiserResult<NetworkMode> {
        Ok(self.settings()?.network_mode)
    }

    pub fn update_vault(&mut self, caller: &Identity, new_vault: Identity) -> FundraiserResult<()> {
        self.owner_settings(caller, "update the vault address")?.vault = new_vault;
        Ok(())
    }

    pub fn update_fees(&mut self, caller: &Identity, new_fees: Amount) -> FundraiserResult<()> {
        self.owner_settings(caller, "update fees")?.fees = new_fees;
        Ok(())
    }

    pub fn snapshot(&self, next_id: FundId) -> FundraiserResult<ConfigSnapshot> {
        let settings = self.settings()?;
        Ok(ConfigSnapshot {
            owner: settings.owner.clone(),
            vault: settings.vault.clone(),
            fees: settings.fees,
            network_mode: settings.network_mode,
            next_id,
        })
    }

    fn settings(&self) -> FundraiserResult<&AdminSettings> {
        self.settings.as_ref().ok_or(FundraiserError::NotInitialized)
    }

    fn owner_settings(
        &mut self,
        caller: &Identity,
        operation: &'static str,
    ) -> FundraiserResult<&mut AdminSettings> {
        let settings = self.settings.as_mut().ok_or(FundraiserError::NotInitialized)?;
        if !AuthorizationGuard::is_owner(&settings.owner, caller) {
            return Err(FundraiserError::Unauthorized {
                caller: caller.to_string(),
                operation,
                fund_id: None,
            });
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Identity {
        Identity::from_text("owner")
    }

    #[test]
    fn test_uninitialized_rejects_everything() {
        let mut state = ConfigState::new();
        assert_eq!(state.network_mode(), Err(FundraiserError::NotInitialized));
        assert_eq!(state.snapshot(0), Err(FundraiserError::NotInitialized));
        assert_eq!(
            state.update_fees(&owner(), 1),
            Err(FundraiserError::NotInitialized)
        );
    }

    #[test]
    fn test_initialize_once() {
        let mut state = ConfigState::new();
        state.initialize(&owner(), NetworkMode::Main).unwrap();

        let snapshot = state.snapshot(5).unwrap();
        assert_eq!(snapshot.owner, owner());
        assert_eq!(snapshot.vault, owner());
        assert_eq!(snapshot.fees, 0);
        assert_eq!(snapshot.network_mode, NetworkMode::Main);
        assert_eq!(snapshot.next_id, 5);

        assert_eq!(
            state.initialize(&Identity::from_text("other"), NetworkMode::Local),
            Err(FundraiserError::AlreadyInitialized)
        );
        assert_eq!(state.snapshot(5).unwrap().owner, owner());
    }

    #[test]
    fn test_setters_are_owner_gated() {
        let mut state = ConfigState::new();
        state.initialize(&owner(), NetworkMode::Local).unwrap();
        let intruder = Identity::from_text("intruder");

        assert!(matches!(
            state.update_vault(&intruder, intruder.clone()),
            Err(FundraiserError::Unauthorized { fund_id: None, .. })
        ));
        assert!(matches!(
            state.update_fees(&intruder, 9),
            Err(FundraiserError::Unauthorized { .. })
        ));
        assert_eq!(state.snapshot(0).unwrap().fees, 0);

        let vault = Identity::from_text("vault");
        state.update_vault(&owner(), vault.clone()).unwrap();
        state.update_fees(&owner(), 25).unwrap();

        let snapshot = state.snapshot(0).unwrap();
        assert_eq!(snapshot.vault, vault);
        assert_eq!(snapshot.fees, 25);
        assert_eq!(snapshot.owner, owner());
    }
}
