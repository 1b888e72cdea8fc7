// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT records as served by the marketplace

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A single NFT listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    /// When the NFT was minted on the marketplace
    pub created_at: DateTime<Utc>,
    /// Display name
    pub name: String,
    /// Ordered artwork image URLs, largest first
    pub images: Vec<Url>,
    /// Star rating, 0-5
    pub rating: u8,
    /// Free-form description
    pub description: String,
    /// Price in the marketplace's display currency (ETH)
    pub price: f64,
    /// Page of the author who minted the NFT
    pub author: Url,
    /// Unique identifier
    pub id: String,
}

impl Nft {
    /// The image used in list cells, if the listing has any artwork
    pub fn preview_image(&self) -> Option<&Url> {
        self.images.first()
    }
}
