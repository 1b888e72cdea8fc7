// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Cart order service

use market_types::{Order, OrderUpdate};
use net_client::{NetworkClient, NetworkError};
use tracing::{debug, info};
use url::Url;

/// Reads and updates the user's cart order
#[derive(Debug, Clone)]
pub struct OrderService {
    client: NetworkClient,
    base: Url,
}

impl OrderService {
    /// Create a service over the given client
    pub fn new(client: NetworkClient) -> Self {
        let base = client.config().base_url.clone();
        Self { client, base }
    }

    /// Fetch the current cart
    pub async fn order(&self) -> Result<Order, NetworkError> {
        debug!("fetching order");
        self.client
            .send_json(&crate::endpoints::order(&self.base))
            .await
    }

    /// Replace the cart contents and return the resulting order
    pub async fn update_order(&self, update: &OrderUpdate) -> Result<Order, NetworkError> {
        let request = crate::endpoints::update_order(&self.base, update)?;
        let order: Order = self.client.send_json(&request).await?;
        info!(count = order.nfts.len(), "order updated");
        Ok(order)
    }

    /// Remove one NFT from the cart and return the updated order
    pub async fn remove_nft(&self, nft_id: &str) -> Result<Order, NetworkError> {
        let current = self.order().await?;

        let nfts: Vec<String> = current
            .nfts
            .into_iter()
            .filter(|id| id != nft_id)
            .collect();

        self.update_order(&OrderUpdate::new(nfts)).await
    }

    /// Empty the cart and return the updated order
    pub async fn clear(&self) -> Result<Order, NetworkError> {
        self.update_order(&OrderUpdate::default()).await
    }
}
