//! Fundraiser node entry point.

use anyhow::{Context, Result};
use fundraiser_node::{init_logging, FundraiserConfig, FundraiserNode};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = FundraiserConfig::from_env().context("invalid configuration")?;
    init_logging(&config.logging)?;

    info!(
        mode = %config.network_mode,
        store = ?config.store.backend,
        data_dir = %config.store.data_dir.display(),
        "[fundraiser] Starting fundraiser node"
    );

    let node = FundraiserNode::build(config)?;
    node.bootstrap().await?;

    info!("[fundraiser] Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("[fundraiser] Shutting down");
    Ok(())
}
