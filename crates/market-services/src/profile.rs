// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Profile service

use market_types::{Profile, ProfileUpdate};
use net_client::{NetworkClient, NetworkError};
use tracing::{debug, info};
use url::Url;

/// Reads and updates the marketplace user profile
#[derive(Debug, Clone)]
pub struct ProfileService {
    client: NetworkClient,
    base: Url,
}

impl ProfileService {
    /// Create a service over the given client
    pub fn new(client: NetworkClient) -> Self {
        let base = client.config().base_url.clone();
        Self { client, base }
    }

    /// Fetch the user profile
    pub async fn profile(&self) -> Result<Profile, NetworkError> {
        debug!("fetching profile");
        self.client
            .send_json(&crate::endpoints::profile(&self.base))
            .await
    }

    /// Apply a partial update and return the resulting profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, NetworkError> {
        let request = crate::endpoints::update_profile(&self.base, update)?;
        let profile: Profile = self.client.send_json(&request).await?;
        info!(id = %profile.id, "profile updated");
        Ok(profile)
    }

    /// Toggle a like for the given NFT and return the updated profile.
    ///
    /// Reads the current liked set, flips the given id, and writes the
    /// replacement back. Two concurrent toggles can race; the server
    /// keeps whichever write lands last, as in the original application.
    pub async fn toggle_like(&self, nft_id: &str) -> Result<Profile, NetworkError> {
        let current = self.profile().await?;

        let mut likes = current.likes;
        match likes.iter().position(|id| id == nft_id) {
            Some(index) => {
                likes.remove(index);
            }
            None => likes.push(nft_id.to_string()),
        }

        self.update_profile(&ProfileUpdate::likes(likes)).await
    }
}
