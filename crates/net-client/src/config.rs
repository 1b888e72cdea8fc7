// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! Configuration for the marketplace client, supporting layered loading
//! from defaults, an optional configuration file, and environment
//! variables. The service token is deliberately absent from source; it
//! must arrive through configuration.

use std::time::Duration;

use anyhow::{Result, ensure};
use config::{Config, ConfigError, Environment as ConfigEnv, File};
use serde::{Deserialize, Deserializer, de};
use url::Url;

use crate::error::NetworkError;

/// Header carrying the marketplace service token on every request
pub const AUTH_HEADER: &str = "X-Practicum-Mobile-Token";

/// User agent stamped on the underlying HTTP client
pub(crate) const USER_AGENT: &str = concat!("fakenft-client/", env!("CARGO_PKG_VERSION"));

const DEFAULT_BASE_URL: &str = "https://d5dn3j2ouj72b0ejucbl.apigw.yandexcloud.net/";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// A validated request timeout in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutSeconds(u64);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(seconds <= 300, "timeout cannot exceed 300");
        Ok(Self(seconds))
    }

    /// Safe default timeout (30 seconds)
    pub const fn default_value() -> Self {
        Self(DEFAULT_TIMEOUT_SECONDS)
    }

    /// The timeout in whole seconds
    pub fn seconds(&self) -> u64 {
        self.0
    }

    /// The timeout as a [`Duration`]
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self::default_value()
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

/// Configuration for the marketplace network client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the marketplace API
    pub base_url: Url,
    /// Service token sent with every request
    pub token: String,
    /// Request timeout (validated range: 1-300 seconds)
    #[serde(default)]
    pub timeout_seconds: TimeoutSeconds,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // The default base URL carries no credential; the token still
            // has to come from configuration.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            token: "test-token".to_string(),
            timeout_seconds: TimeoutSeconds::default(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given base URL and token
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            base_url,
            token: token.into(),
            timeout_seconds: TimeoutSeconds::default(),
        }
    }

    /// Load configuration from files and environment variables
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. Default values
    /// 2. `fakenft.json` in the working directory, if present
    /// 3. Environment variables with the `FAKENFT_` prefix
    ///    (`FAKENFT_BASE_URL`, `FAKENFT_TOKEN`, `FAKENFT_TIMEOUT_SECONDS`)
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Config`] if configuration cannot be loaded
    /// or fails validation.
    pub fn from_env() -> Result<Self, NetworkError> {
        Self::load().map_err(|e| NetworkError::Config(format!("failed to load configuration: {e}")))
    }

    fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("token", "")?
            .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .add_source(File::with_name("fakenft.json").required(false))
            .add_source(ConfigEnv::with_prefix("FAKENFT").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}
