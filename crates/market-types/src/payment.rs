// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Payment flow types: crypto-currency options and the payment result

use serde::{Deserialize, Serialize};
use url::Url;

/// A crypto-currency the marketplace accepts for payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Full currency name, e.g. "Bitcoin"
    pub title: String,
    /// Ticker symbol, e.g. "BTC"
    pub name: String,
    /// Currency icon
    pub image: Url,
    /// Unique identifier
    pub id: String,
}

impl Currency {
    /// Display label combining name and ticker, e.g. "Bitcoin (BTC)"
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.title, self.name)
    }
}

/// Result of a payment attempt for an order.
///
/// A declined payment decodes successfully with `success == false`;
/// whether to retry is the caller's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    /// Whether the payment went through
    pub success: bool,
    /// The order that was paid
    pub order_id: String,
    /// The currency the payment was attempted with
    pub id: String,
}
