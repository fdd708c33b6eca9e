//! # Authorization Guard
//!
//! Stateless predicates over caller identity. Every lifecycle or
//! administrative mutation runs one of these before any side effect.
//!
//! | Operation | Required role |
//! |-----------|---------------|
//! | pause / restart / update duration | raiser |
//! | withdraw | recipient |
//! | update vault / update fees | process owner |

use super::entities::Fund;
use super::errors::RegistryError;
use shared_types::Identity;

/// Authorization predicates.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    pub fn is_raiser(fund: &Fund, caller: &Identity) -> bool {
        &fund.address_raiser == caller
    }

    pub fn is_recipient(fund: &Fund, caller: &Identity) -> bool {
        &fund.address_recipient == caller
    }

    pub fn is_owner(owner: &Identity, caller: &Identity) -> bool {
        owner == caller
    }

    /// Fails with `Unauthorized` unless `caller` raised `fund`.
    pub fn require_raiser(
        fund: &Fund,
        caller: &Identity,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        if !Self::is_raiser(fund, caller) {
            return Err(RegistryError::Unauthorized {
                id: fund.id,
                caller: caller.to_string(),
                operation,
            });
        }
        Ok(())
    }

    /// Fails with `Unauthorized` unless `caller` is the payout recipient.
    pub fn require_recipient(
        fund: &Fund,
        caller: &Identity,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        if !Self::is_recipient(fund, caller) {
            return Err(RegistryError::Unauthorized {
                id: fund.id,
                caller: caller.to_string(),
                operation,
            });
        }
        Ok(())
    }
}
