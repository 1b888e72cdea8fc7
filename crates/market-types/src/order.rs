// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The cart order and its update payload

use serde::{Deserialize, Serialize};

/// The user's current order (the cart)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Identifiers of NFTs currently in the cart
    pub nfts: Vec<String>,
    /// Unique identifier
    pub id: String,
}

impl Order {
    /// Whether the cart is empty
    pub fn is_empty(&self) -> bool {
        self.nfts.is_empty()
    }

    /// Whether the cart contains the given NFT
    pub fn contains(&self, nft_id: &str) -> bool {
        self.nfts.iter().any(|id| id == nft_id)
    }
}

/// Replacement cart contents sent with `PUT api/v1/orders/1`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderUpdate {
    /// The full replacement set of NFT ids
    pub nfts: Vec<String>,
}

impl OrderUpdate {
    /// Build an update from the given NFT ids
    pub fn new(nfts: Vec<String>) -> Self {
        Self { nfts }
    }
}
