// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Service composition root
//!
//! One [`ServiceAssembly`] is constructed at process start and handed to
//! consumers; all services share a single [`NetworkClient`] and its
//! connection pool. There are no global singletons anywhere in the SDK.

use net_client::{ClientConfig, NetworkClient, NetworkError};

use crate::{NftService, OrderService, PaymentService, ProfileService};

/// The full set of marketplace services over one shared client
#[derive(Debug, Clone)]
pub struct ServiceAssembly {
    nft: NftService,
    profile: ProfileService,
    order: OrderService,
    payment: PaymentService,
}

impl ServiceAssembly {
    /// Build the shared client from `config` and assemble every service
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Config`] if the configuration is invalid.
    pub fn new(config: ClientConfig) -> Result<Self, NetworkError> {
        let client = NetworkClient::new(config)?;
        Ok(Self::with_client(client))
    }

    /// Assemble services over an existing client
    pub fn with_client(client: NetworkClient) -> Self {
        Self {
            nft: NftService::new(client.clone()),
            profile: ProfileService::new(client.clone()),
            order: OrderService::new(client.clone()),
            payment: PaymentService::new(client),
        }
    }

    /// The NFT catalog service
    pub fn nft(&self) -> &NftService {
        &self.nft
    }

    /// The profile service
    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    /// The cart order service
    pub fn order(&self) -> &OrderService {
        &self.order
    }

    /// The payment service
    pub fn payment(&self) -> &PaymentService {
        &self.payment
    }
}
