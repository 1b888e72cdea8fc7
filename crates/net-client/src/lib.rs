// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP networking core for the FakeNFT marketplace client
//!
//! This crate is the single point of contact with the marketplace API.
//! Callers describe a call with an [`HttpRequest`], hand it to a
//! [`NetworkClient`], and receive either raw bytes or a decoded value,
//! with every failure classified into one [`NetworkError`] taxonomy.
//!
//! # Core Abstractions
//!
//! - **[`HttpRequest`]**: value object describing a call before execution
//! - **[`NetworkClient`]**: executes descriptors, classifies outcomes
//! - **[`NetworkTask`]**: cancellable handle for an in-flight call
//! - **[`CompletionContext`]**: execution context results are delivered on
//! - **[`NetworkError`]**: one error taxonomy for every caller
//!
//! # Key Properties
//!
//! - **No internal retries**: transient failures are reported, retry
//!   policy belongs to the caller ([`NetworkError::is_retryable`] helps)
//! - **No panics on external input**: malformed descriptors and unusual
//!   server responses become typed errors
//! - **Externalized credential**: the service token arrives through
//!   [`ClientConfig`], never from a source constant

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod task;

pub use client::NetworkClient;
pub use config::{AUTH_HEADER, ClientConfig, TimeoutSeconds};
pub use error::NetworkError;
pub use request::{HttpMethod, HttpRequest};
pub use task::{CompletionContext, NetworkTask};
