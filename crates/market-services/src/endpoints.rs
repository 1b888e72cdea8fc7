// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request builders for the marketplace endpoints
//!
//! Pure functions from a base URL to request descriptors. A join that
//! fails produces a descriptor without an endpoint, which the client
//! rejects with [`NetworkError::MissingEndpoint`](net_client::NetworkError)
//! instead of reaching the transport.
//!
//! The marketplace serves a single demo profile and order, both with
//! id 1, which is why the profile and order paths are fixed.

use market_types::{OrderUpdate, ProfileUpdate};
use net_client::{HttpRequest, NetworkError};
use url::Url;

const NFTS_PATH: &str = "api/v1/nft";
const PROFILE_PATH: &str = "api/v1/profile/1";
const ORDER_PATH: &str = "api/v1/orders/1";
const CURRENCIES_PATH: &str = "api/v1/currencies";

/// `GET api/v1/nft` — every listing on the marketplace
pub fn nfts(base: &Url) -> HttpRequest {
    HttpRequest::get(base.join(NFTS_PATH).ok())
}

/// `GET api/v1/nft/{id}` — one listing
pub fn nft_by_id(base: &Url, id: &str) -> HttpRequest {
    HttpRequest::get(base.join(&format!("{NFTS_PATH}/{id}")).ok())
}

/// `GET api/v1/profile/1` — the user profile
pub fn profile(base: &Url) -> HttpRequest {
    HttpRequest::get(base.join(PROFILE_PATH).ok())
}

/// `PUT api/v1/profile/1` — update the user profile
pub fn update_profile(base: &Url, update: &ProfileUpdate) -> Result<HttpRequest, NetworkError> {
    HttpRequest::put(base.join(PROFILE_PATH).ok()).with_json_payload(update)
}

/// `GET api/v1/orders/1` — the current cart
pub fn order(base: &Url) -> HttpRequest {
    HttpRequest::get(base.join(ORDER_PATH).ok())
}

/// `PUT api/v1/orders/1` — replace the cart contents
pub fn update_order(base: &Url, update: &OrderUpdate) -> Result<HttpRequest, NetworkError> {
    HttpRequest::put(base.join(ORDER_PATH).ok()).with_json_payload(update)
}

/// `GET api/v1/currencies` — accepted crypto-currencies
pub fn currencies(base: &Url) -> HttpRequest {
    HttpRequest::get(base.join(CURRENCIES_PATH).ok())
}

/// `GET api/v1/orders/1/payment/{currency_id}` — pay the cart
pub fn pay_order(base: &Url, currency_id: &str) -> HttpRequest {
    HttpRequest::get(base.join(&format!("{ORDER_PATH}/payment/{currency_id}")).ok())
}
