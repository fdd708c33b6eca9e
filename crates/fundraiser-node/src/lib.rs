//! # Fundraiser Node
//!
//! Hosts the fundraiser in one process.
//!
//! ## Modular Structure
//!
//! - `config` - Environment-driven configuration
//! - `logging` - `tracing-subscriber` setup
//! - `store` - Store backend selected at startup
//! - `runtime` - Wiring of registry, ledgers and treasury service
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize logging
//! 3. Open the fund store
//! 4. Build ledger bindings (local test token, remote JSON-RPC ledger)
//! 5. Initialize the treasury if an owner is configured
//! 6. Serve until Ctrl+C

pub mod config;
pub mod logging;
pub mod runtime;
pub mod store;

pub use config::{ConfigError, FundraiserConfig, LogConfig, StoreBackend, StoreConfig};
pub use logging::init_logging;
pub use runtime::{FundraiserNode, NodeService};
pub use store::{NodeStore, StoreOpenError};
