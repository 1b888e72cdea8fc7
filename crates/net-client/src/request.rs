// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request descriptors
//!
//! An [`HttpRequest`] describes a marketplace call before execution:
//! endpoint, method, and an optional JSON payload. Descriptors are plain
//! values; the [`crate::NetworkClient`] turns them into transport
//! requests. A descriptor without an endpoint is representable (endpoint
//! construction can fail upstream) and is rejected with a typed error
//! when sent, never with a panic.

use serde::Serialize;
use url::Url;

use crate::error::NetworkError;

/// HTTP methods the marketplace API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Fetch a resource
    Get,
    /// Create a resource
    Post,
    /// Replace a resource
    Put,
    /// Remove a resource
    Delete,
}

impl HttpMethod {
    /// The method name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Value object describing an HTTP call before execution
#[derive(Debug, Clone)]
pub struct HttpRequest {
    endpoint: Option<Url>,
    method: HttpMethod,
    payload: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a descriptor for the given method and endpoint.
    ///
    /// `endpoint` accepts an `Option` so that fallible URL construction
    /// upstream (a bad join, user-supplied ids) flows into a descriptor
    /// that the client rejects with [`NetworkError::MissingEndpoint`].
    pub fn new(method: HttpMethod, endpoint: impl Into<Option<Url>>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            payload: None,
        }
    }

    /// GET descriptor
    pub fn get(endpoint: impl Into<Option<Url>>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    /// POST descriptor
    pub fn post(endpoint: impl Into<Option<Url>>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    /// PUT descriptor
    pub fn put(endpoint: impl Into<Option<Url>>) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    /// DELETE descriptor
    pub fn delete(endpoint: impl Into<Option<Url>>) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    /// Attach a JSON payload, encoded to bytes now.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Encoding`] if the payload fails to
    /// serialize.
    pub fn with_json_payload<T: Serialize>(mut self, payload: &T) -> Result<Self, NetworkError> {
        let encoded = serde_json::to_vec(payload).map_err(NetworkError::Encoding)?;
        self.payload = Some(encoded);
        Ok(self)
    }

    /// The endpoint URL, if one was constructed
    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// The HTTP method
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The encoded body, if a payload was attached
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}
