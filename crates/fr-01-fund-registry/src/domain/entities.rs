//! # Fund Entity
//!
//! A fund is a crowdfunding campaign: a target amount, a running total, the
//! identity that raised it, the identity entitled to withdraw, and a window
//! during which donations are accepted.
//!
//! State machine:
//! ```text
//!            pause (raiser)
//! [ACTIVE] ─────────────────→ [PAUSED]
//!     ↑                          │
//!     └──────── restart ─────────┘
//!
//! funding: [OPEN] ──total ≥ amount──→ [TARGET_REACHED] ──withdraw──→ [WITHDRAWN]
//!                                            ↑                            │
//!                                            └────── donate again ────────┘
//! ```
//!
//! The two axes are orthogonal: pausing never touches funding progress.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, DurationNanos, FundId, Identity, Timestamp};

/// A fund record as persisted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    pub id: FundId,
    /// Target value required before withdrawal unlocks. Fixed at creation.
    pub amount: Amount,
    /// Cumulative value received. Never decremented.
    pub total_amount_funded: Amount,
    /// Value received and not yet withdrawn.
    pub available: Amount,
    pub address_raiser: Identity,
    pub address_recipient: Identity,
    pub created_at: Timestamp,
    /// Donations are rejected once `now > expiry`.
    pub expiry: Timestamp,
    pub active: bool,
    /// Bumped by every committed change.
    pub revision: u64,
}

/// Funding progress of a fund, derived from its counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingProgress {
    /// Target not yet met.
    Open,
    /// Target met, value available to withdraw.
    TargetReached,
    /// Target met and nothing left to withdraw.
    Withdrawn,
}

impl Fund {
    /// Build a fresh fund. Expiry saturates instead of wrapping.
    pub fn new(
        id: FundId,
        amount: Amount,
        recipient: Identity,
        duration: DurationNanos,
        raiser: Identity,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            amount,
            total_amount_funded: 0,
            available: 0,
            address_raiser: raiser,
            address_recipient: recipient,
            created_at: now,
            expiry: now.saturating_add(duration),
            active: true,
            revision: 0,
        }
    }

    /// Whether a donation arriving at `now` is eligible.
    ///
    /// Accepted while `now <= expiry`; the expiry instant itself is still open.
    pub fn accepts_donations_at(&self, now: Timestamp) -> bool {
        self.active && now <= self.expiry
    }

    /// Whether the target has been met (`total >= amount`).
    pub fn target_reached(&self) -> bool {
        self.total_amount_funded >= self.amount
    }

    pub fn progress(&self) -> FundingProgress {
        if !self.target_reached() {
            FundingProgress::Open
        } else if self.available == 0 {
            FundingProgress::Withdrawn
        } else {
            FundingProgress::TargetReached
        }
    }

    /// Candidate record after a confirmed donation of `value`.
    ///
    /// Returns `None` on counter overflow.
    pub fn with_donation(&self, value: Amount) -> Option<Fund> {
        Some(Fund {
            total_amount_funded: self.total_amount_funded.checked_add(value)?,
            available: self.available.checked_add(value)?,
            ..self.clone()
        })
    }

    /// Candidate record after a confirmed withdrawal of `value`.
    ///
    /// Returns `None` if more than `available` would leave.
    pub fn with_withdrawal(&self, value: Amount) -> Option<Fund> {
        Some(Fund {
            available: self.available.checked_sub(value)?,
            ..self.clone()
        })
    }

    pub fn with_active(&self, active: bool) -> Fund {
        Fund {
            active,
            ..self.clone()
        }
    }

    /// Candidate record with `expiry = created_at + duration`.
    ///
    /// The new expiry is measured from creation, never from "now".
    pub fn with_duration(&self, duration: DurationNanos) -> Fund {
        Fund {
            expiry: self.created_at.saturating_add(duration),
            ..self.clone()
        }
    }
}
