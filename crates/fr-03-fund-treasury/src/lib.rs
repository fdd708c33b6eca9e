//! # Fund Treasury (fr-03)
//!
//! The donate/withdraw protocol and the administrative surface of the
//! fundraiser.
//!
//! ## Overview
//!
//! Every treasury operation follows the same shape:
//!
//! ```text
//! caller ──→ guard ──→ registry snapshot ──→ ledger call (suspends)
//!                                                  │
//!                          registry compare-and-set ←┘  (reload + retry on conflict)
//! ```
//!
//! No lock is held across a ledger await. A commit lands only against the
//! exact snapshot read before the suspension, so two donations racing on the
//! same fund both count.
//!
//! ## Funding Progress
//!
//! ```text
//! [OPEN] ──total >= target──→ [TARGET REACHED] ──withdraw──→ [WITHDRAWN]
//!                                    ↑                            │
//!                                    └──────── re-donation ───────┘
//! ```
//!
//! Orthogonal to progress, the raiser toggles `active` (pause / restart).
//!
//! ## Example
//!
//! ```rust,ignore
//! use fr_03_fund_treasury::{FundraiserApi, FundraiserService, LedgerBindings, ProtocolConfig};
//!
//! let service = FundraiserService::new(registry, bindings, clock, ProtocolConfig::default());
//! service.initialize(&owner, NetworkMode::Local).await?;
//!
//! let fund = service.create_new_fund(&raiser, 100, recipient, one_day).await?;
//! let escrow = service.get_address_to_deposit(&donor).await?;
//! // donor deposits to `escrow` out-of-band
//! service.donate(&donor, fund.id, 60).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{LedgerBindings, SystemTimeSource};
pub use domain::{
    ConfigSnapshot, ConfigState, Receipt, ReconciliationReport, ReconciliationStatus, TOKEN_NAME,
    TOKEN_SUPPLY, TOKEN_SYMBOL,
};
pub use error::{FundraiserError, FundraiserResult};
pub use ports::inbound::{Destination, FundraiserApi};
pub use ports::outbound::TimeSource;
pub use service::{FundraiserService, ProtocolConfig};
