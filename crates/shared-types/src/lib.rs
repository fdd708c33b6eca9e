//! # Shared Types Crate
//!
//! Value types shared by the fundraiser subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identities, amounts and ledger addresses are
//!   defined once here and re-used by the registry, ledger and treasury crates.
//! - **Derived, not stored**: ledger account addresses are pure functions of an
//!   owner identity and a sub-account selector, so nothing about addressing is
//!   ever persisted.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
