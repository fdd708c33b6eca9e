pub mod config;
pub mod receipt;

pub use config::{ConfigSnapshot, ConfigState, TOKEN_NAME, TOKEN_SUPPLY, TOKEN_SYMBOL};
pub use receipt::{ReconciliationReport, ReconciliationStatus, Receipt};
