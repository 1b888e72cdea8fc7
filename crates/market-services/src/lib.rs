// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed service objects for the FakeNFT marketplace API
//!
//! Each service wraps the shared [`net_client::NetworkClient`] with the
//! calls one screen of the original application needs: the NFT catalog,
//! the user profile, the cart order, and the payment flow. Services are
//! composed once by [`ServiceAssembly`] and passed to consumers —
//! explicit dependency injection instead of shared singletons.
//!
//! # Example
//!
//! ```no_run
//! use market_services::ServiceAssembly;
//! use net_client::ClientConfig;
//!
//! # async fn run() -> Result<(), net_client::NetworkError> {
//! let services = ServiceAssembly::new(ClientConfig::from_env()?)?;
//! let nft = services.nft().nft("123").await?;
//! println!("{} costs {} ETH", nft.name, nft.price);
//! # Ok(())
//! # }
//! ```

pub mod assembly;
pub mod endpoints;
pub mod nft;
pub mod order;
pub mod payment;
pub mod profile;

pub use assembly::ServiceAssembly;
pub use nft::NftService;
pub use order::OrderService;
pub use payment::PaymentService;
pub use profile::ProfileService;
