// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic fetcher for the FakeNFT marketplace
//!
//! Usage: `nft-fetch [NFT_ID]`
//!
//! With an id, fetches that NFT; without, fetches the user profile.
//! Configuration comes from `fakenft.json` and `FAKENFT_*` environment
//! variables; `FAKENFT_TOKEN` must be set.

use anyhow::Result;
use market_services::ServiceAssembly;
use net_client::ClientConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    info!(base_url = %config.base_url, "connecting to marketplace");

    let services = ServiceAssembly::new(config)?;

    match std::env::args().nth(1) {
        Some(id) => {
            let nft = services.nft().nft(&id).await?;
            println!("{}", serde_json::to_string_pretty(&nft)?);
        }
        None => {
            let profile = services.profile().profile().await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
    }

    Ok(())
}
