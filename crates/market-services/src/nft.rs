// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT catalog service

use market_types::Nft;
use net_client::{NetworkClient, NetworkError};
use tracing::debug;
use url::Url;

/// Fetches NFT listings from the marketplace
#[derive(Debug, Clone)]
pub struct NftService {
    client: NetworkClient,
    base: Url,
}

impl NftService {
    /// Create a service over the given client
    pub fn new(client: NetworkClient) -> Self {
        let base = client.config().base_url.clone();
        Self { client, base }
    }

    /// Fetch a single NFT by id
    pub async fn nft(&self, id: &str) -> Result<Nft, NetworkError> {
        debug!(id, "fetching NFT");
        self.client
            .send_json(&crate::endpoints::nft_by_id(&self.base, id))
            .await
    }

    /// Fetch every NFT listing
    pub async fn nfts(&self) -> Result<Vec<Nft>, NetworkError> {
        debug!("fetching NFT catalog");
        self.client
            .send_json(&crate::endpoints::nfts(&self.base))
            .await
    }

    /// Fetch the NFTs with the given ids, in order.
    ///
    /// The marketplace has no batch endpoint; ids are fetched one by one
    /// and the first failure aborts the remainder.
    pub async fn nfts_by_ids(&self, ids: &[String]) -> Result<Vec<Nft>, NetworkError> {
        let mut nfts = Vec::with_capacity(ids.len());
        for id in ids {
            nfts.push(self.nft(id).await?);
        }
        Ok(nfts)
    }
}
