//! # JSON-RPC Ledger Client
//!
//! Remote ledger binding for main mode. Speaks JSON-RPC 2.0 over HTTP.
//!
//! ## Wire Format
//!
//! Amounts travel as decimal strings so that `u128` survives JSON parsers
//! limited to 64-bit numbers. Accounts travel as 64-char hex.
//!
//! ```text
//! account_balance  [{"account": "<hex>"}]                                -> {"balance": "123"}
//! transfer         [{"from": "<hex>", "to": "<hex>", "amount": "60",
//!                    "memo": "<uuid>"}]                                  -> {"block_index": 42}
//! ```

use crate::error::{LedgerError, LedgerResult};
use crate::ports::outbound::{LedgerReceipt, TreasuryLedgerClient};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared_types::{AccountAddress, Amount};
use std::env;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Connection settings for the remote ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRpcLedgerConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token sent with every request, if any
    pub auth_token: Option<String>,
}

impl Default for JsonRpcLedgerConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8080/rpc".to_string(),
            timeout_secs: 30,
            auth_token: None,
        }
    }
}

impl JsonRpcLedgerConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - FR_LEDGER_RPC_URL: RPC endpoint URL
    /// - FR_LEDGER_RPC_TIMEOUT: Request timeout in seconds
    /// - FR_LEDGER_RPC_TOKEN: Bearer token (optional)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            url: lookup("FR_LEDGER_RPC_URL").unwrap_or(defaults.url),
            timeout_secs: lookup("FR_LEDGER_RPC_TIMEOUT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            auth_token: lookup("FR_LEDGER_RPC_TOKEN").filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: [P; 1],
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Serialize)]
struct BalanceParams {
    account: String,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    balance: String,
}

#[derive(Debug, Serialize)]
struct TransferParams {
    from: String,
    to: String,
    amount: String,
    memo: String,
}

#[derive(Debug, Deserialize)]
struct TransferResult {
    block_index: u64,
}

fn parse_amount(text: &str) -> LedgerResult<Amount> {
    text.parse().map_err(|_| LedgerError::InvalidResponse {
        reason: format!("amount {:?} is not a base-10 u128", text),
    })
}

/// JSON-RPC client for a remote ledger.
pub struct JsonRpcLedgerClient {
    client: Client,
    config: JsonRpcLedgerConfig,
    request_id: AtomicU64,
}

impl JsonRpcLedgerClient {
    pub fn new(config: JsonRpcLedgerConfig) -> LedgerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedgerError::Unavailable {
                reason: e.to_string(),
            })?;

        info!("[fr-02] JSON-RPC ledger client targeting {}", config.url);
        Ok(Self {
            client,
            config,
            request_id: AtomicU64::new(0),
        })
    }

    async fn call<P, T>(&self, method: &str, params: P) -> LedgerResult<T>
    where
        P: Serialize + Send,
        T: for<'de> Deserialize<'de> + Send,
    {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params: [params],
        };

        debug!("[fr-02] Ledger RPC call: {} id={}", method, id);

        let mut builder = self.client.post(&self.config.url).json(&request);
        if let Some(token) = &self.config.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| LedgerError::Unavailable {
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Unavailable {
                reason: format!("HTTP {} - {}", status, body),
            });
        }

        let rpc_response: RpcResponse<T> =
            response
                .json()
                .await
                .map_err(|e| LedgerError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        if let Some(error) = rpc_response.error {
            return Err(LedgerError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        rpc_response.result.ok_or_else(|| LedgerError::InvalidResponse {
            reason: "empty result".to_string(),
        })
    }
}

#[async_trait]
impl TreasuryLedgerClient for JsonRpcLedgerClient {
    async fn transfer(
        &self,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> LedgerResult<LedgerReceipt> {
        let correlation_id = Uuid::new_v4();
        let params = TransferParams {
            from: from.to_hex(),
            to: to.to_hex(),
            amount: amount.to_string(),
            memo: correlation_id.to_string(),
        };

        let result: TransferResult = self.call("transfer", params).await.map_err(|e| {
            error!(%correlation_id, "[fr-02] ❌ Remote transfer failed: {}", e);
            e
        })?;

        Ok(LedgerReceipt {
            correlation_id,
            block_index: result.block_index,
            from,
            to,
            amount,
        })
    }

    async fn balance_of(&self, account: AccountAddress) -> LedgerResult<Amount> {
        let params = BalanceParams {
            account: account.to_hex(),
        };
        let result: BalanceResult = self.call("account_balance", params).await?;
        parse_amount(&result.balance)
    }
}
