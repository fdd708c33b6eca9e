//! # Sub-account Derivation
//!
//! Deterministic mapping from donors and funds to sub-accounts of the
//! treasury principal. Pure functions of their inputs: no randomness, no
//! stored state.

use sha2::{Digest, Sha256};
use shared_types::{AccountAddress, FundId, Identity, SubAccount};

const DONOR_TAG: &[u8] = b"fundraiser/donor";
const FUND_TAG: &[u8] = b"fundraiser/fund";

/// Derives escrow and collecting accounts under one treasury principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubaccountAddressDeriver {
    treasury: Identity,
}

impl SubaccountAddressDeriver {
    pub fn new(treasury: Identity) -> Self {
        Self { treasury }
    }

    /// Escrow sub-account of `identity`.
    ///
    /// The identity length is hashed too, so no two identities share a
    /// preimage even when one is a prefix of the other.
    pub fn derive(identity: &Identity) -> SubAccount {
        let bytes = identity.as_bytes();
        let mut hasher = Sha256::new();
        hasher.update(DONOR_TAG);
        hasher.update((bytes.len() as u64).to_be_bytes());
        hasher.update(bytes);
        SubAccount(hasher.finalize().into())
    }

    /// Collecting sub-account of fund `id`.
    pub fn for_fund(id: FundId) -> SubAccount {
        let mut hasher = Sha256::new();
        hasher.update(FUND_TAG);
        hasher.update(id.to_be_bytes());
        SubAccount(hasher.finalize().into())
    }

    /// Ledger address of `subaccount` under the treasury principal.
    pub fn account_address(&self, subaccount: &SubAccount) -> AccountAddress {
        AccountAddress::new(&self.treasury, subaccount)
    }

    /// Where `donor` deposits before calling donate.
    pub fn escrow_account(&self, donor: &Identity) -> AccountAddress {
        self.account_address(&Self::derive(donor))
    }

    pub fn fund_account(&self, id: FundId) -> AccountAddress {
        self.account_address(&Self::for_fund(id))
    }

    /// Default account of the treasury principal.
    pub fn treasury_account(&self) -> AccountAddress {
        self.treasury.account()
    }
}
