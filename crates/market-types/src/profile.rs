// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The user profile and its update payload

use serde::{Deserialize, Serialize};
use url::Url;

/// The marketplace user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<Url>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Personal website
    #[serde(default)]
    pub website: Option<Url>,
    /// Identifiers of NFTs the user owns
    pub nfts: Vec<String>,
    /// Identifiers of NFTs the user has liked
    pub likes: Vec<String>,
    /// Unique identifier
    pub id: String,
}

impl Profile {
    /// Whether the profile owns the given NFT
    pub fn owns(&self, nft_id: &str) -> bool {
        self.nfts.iter().any(|id| id == nft_id)
    }

    /// Whether the profile has liked the given NFT
    pub fn has_liked(&self, nft_id: &str) -> bool {
        self.likes.iter().any(|id| id == nft_id)
    }
}

/// Partial profile update sent with `PUT api/v1/profile/1`.
///
/// Only the populated fields are serialized; the server keeps the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New website
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<Url>,
    /// Replacement set of liked NFT ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// An update that replaces the liked set, leaving the rest untouched
    pub fn likes(likes: Vec<String>) -> Self {
        Self {
            likes: Some(likes),
            ..Self::default()
        }
    }
}
