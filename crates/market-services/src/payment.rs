// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Payment service

use market_types::{Currency, PaymentConfirmation};
use net_client::{NetworkClient, NetworkError};
use tracing::{debug, info, warn};
use url::Url;

/// Lists accepted currencies and pays the cart order
#[derive(Debug, Clone)]
pub struct PaymentService {
    client: NetworkClient,
    base: Url,
}

impl PaymentService {
    /// Create a service over the given client
    pub fn new(client: NetworkClient) -> Self {
        let base = client.config().base_url.clone();
        Self { client, base }
    }

    /// Fetch the crypto-currencies the marketplace accepts
    pub async fn currencies(&self) -> Result<Vec<Currency>, NetworkError> {
        debug!("fetching currencies");
        self.client
            .send_json(&crate::endpoints::currencies(&self.base))
            .await
    }

    /// Attempt to pay the current order with the given currency.
    ///
    /// A declined payment is an `Ok` with `success == false`; the caller
    /// decides whether to offer a retry.
    pub async fn pay(&self, currency_id: &str) -> Result<PaymentConfirmation, NetworkError> {
        debug!(currency_id, "attempting payment");

        let confirmation: PaymentConfirmation = self
            .client
            .send_json(&crate::endpoints::pay_order(&self.base, currency_id))
            .await?;

        if confirmation.success {
            info!(order_id = %confirmation.order_id, "payment succeeded");
        } else {
            warn!(order_id = %confirmation.order_id, currency_id, "payment declined");
        }

        Ok(confirmation)
    }
}
