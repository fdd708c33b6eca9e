//! # Fundraiser Test Suite
//!
//! Cross-crate flows that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── support.rs       # Shared fixtures and ledger doubles
//!     ├── scenario.rs      # End-to-end donate/withdraw flows
//!     ├── interleaving.rs  # Calls racing across ledger awaits
//!     └── persistence.rs   # Restarts over a file-backed store
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fr-tests
//! cargo test -p fr-tests integration::interleaving::
//! ```

pub mod integration;
