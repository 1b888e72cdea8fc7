// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Domain models for the FakeNFT marketplace API
//!
//! Plain decodable records consumed by callers after a successful
//! network call: NFT listings, the user profile, the cart order, and the
//! payment flow types, together with the serializable payloads for the
//! marketplace's update operations.
//!
//! All models are transient values reconstructed per response; nothing
//! here owns anything across calls.

pub mod nft;
pub mod order;
pub mod payment;
pub mod profile;

pub use nft::Nft;
pub use order::{Order, OrderUpdate};
pub use payment::{Currency, PaymentConfirmation};
pub use profile::{Profile, ProfileUpdate};
