//! # Node Configuration
//!
//! Unified configuration for the store, the ledgers and the treasury
//! protocol. Every field has a development default; `from_env` overrides.

use fr_02_treasury_ledger::JsonRpcLedgerConfig;
use fr_03_fund_treasury::ProtocolConfig;
use shared_types::{Identity, NetworkMode, NetworkModeError};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FR_NETWORK: {0}")]
    Network(#[from] NetworkModeError),

    #[error("FR_STORE: unknown backend {0:?} (expected memory, file or rocksdb)")]
    UnknownStoreBackend(String),
}

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct FundraiserConfig {
    /// Ledger binding selected at initialize.
    pub network_mode: NetworkMode,
    /// Identity that initializes the treasury at startup; skipped when unset.
    pub owner: Option<Identity>,
    pub store: StoreConfig,
    /// Remote ledger used in main mode.
    pub ledger: JsonRpcLedgerConfig,
    pub protocol: ProtocolConfig,
    pub logging: LogConfig,
}

/// Store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Lost on exit.
    Memory,
    #[default]
    File,
    /// Requires the `rocksdb` feature.
    RocksDb,
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            "rocksdb" | "rocks" => Ok(StoreBackend::RocksDb),
            other => Err(ConfigError::UnknownStoreBackend(other.to_string())),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Data directory for the fund store.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl StoreConfig {
    /// File used by the file backend.
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join("funds.db")
    }

    /// Directory used by the RocksDB backend.
    pub fn rocksdb_path(&self) -> PathBuf {
        self.data_dir.join("funds.rocksdb")
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive (trace, debug, info, warn, error or a full EnvFilter string)
    pub level: String,
    /// Whether to emit JSON formatted logs
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl FundraiserConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FR_NETWORK`: `local` or `main` (default: local)
    /// - `FR_OWNER`: Identity initializing the treasury at startup
    /// - `FR_STORE`: `memory`, `file` or `rocksdb` (default: file)
    /// - `FR_DATA_DIR`: Data directory (default: ./data)
    /// - `FR_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `FR_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `FR_LEDGER_RPC_*`: see [`JsonRpcLedgerConfig::from_env`]
    /// - `FR_TREASURY_ID`, `FR_MAX_COMMIT_ATTEMPTS`: see [`ProtocolConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let network_mode = match lookup("FR_NETWORK") {
            Some(name) => name.parse()?,
            None => defaults.network_mode,
        };
        let backend = match lookup("FR_STORE") {
            Some(name) => name.parse()?,
            None => defaults.store.backend,
        };

        Ok(Self {
            network_mode,
            owner: lookup("FR_OWNER")
                .filter(|o| !o.is_empty())
                .map(|o| Identity::from_text(&o)),
            store: StoreConfig {
                backend,
                data_dir: lookup("FR_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.store.data_dir),
            },
            ledger: JsonRpcLedgerConfig::from_lookup(&lookup),
            protocol: ProtocolConfig::from_lookup(&lookup),
            logging: LogConfig {
                level: lookup("FR_LOG_LEVEL")
                    .or_else(|| lookup("RUST_LOG"))
                    .unwrap_or(defaults.logging.level),
                json: lookup("FR_JSON_LOGS")
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(defaults.logging.json),
            },
        })
    }
}
