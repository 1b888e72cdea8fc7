// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The marketplace network client
//!
//! Single point of contact with the remote service. The client turns
//! request descriptors into transport requests, executes them, classifies
//! the outcome, and optionally decodes the body into a typed model.
//!
//! Two surfaces are offered:
//!
//! - `async` calls ([`NetworkClient::send`], [`NetworkClient::send_json`])
//!   for straight-line async code;
//! - callback dispatch ([`NetworkClient::dispatch`],
//!   [`NetworkClient::dispatch_json`]) returning a cancellable
//!   [`NetworkTask`], with the result delivered on a caller-chosen
//!   [`CompletionContext`].
//!
//! Separating "get bytes" from "get typed value" lets callers that only
//! need raw bytes skip the decode, and keeps error classification in one
//! place so every caller sees the same taxonomy regardless of endpoint.

use bytes::Bytes;
use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::{AUTH_HEADER, ClientConfig, USER_AGENT},
    error::NetworkError,
    request::HttpRequest,
    task::{CompletionContext, NetworkTask},
};

/// HTTP client for the marketplace API.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    http: Client,
    token: HeaderValue,
    config: ClientConfig,
}

impl NetworkClient {
    /// Create a new client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Config`] if the token is empty or not a
    /// valid header value, and [`NetworkError::Transport`] if the
    /// underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, NetworkError> {
        if config.token.trim().is_empty() {
            return Err(NetworkError::Config(
                "service token cannot be empty".to_string(),
            ));
        }

        let token = HeaderValue::from_str(&config.token).map_err(|_| {
            NetworkError::Config("service token contains invalid header characters".to_string())
        })?;

        let http = Client::builder()
            .timeout(config.timeout_seconds.duration())
            .user_agent(USER_AGENT)
            .build()
            .map_err(NetworkError::Transport)?;

        Ok(Self {
            http,
            token,
            config,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request and return the raw response bytes.
    ///
    /// Outcome classification, in order:
    /// 1. descriptor without an endpoint → [`NetworkError::MissingEndpoint`],
    ///    the transport is never invoked;
    /// 2. no response obtainable → [`NetworkError::Unreachable`];
    /// 3. deadline exceeded → [`NetworkError::Timeout`];
    /// 4. other transport failure → [`NetworkError::Transport`];
    /// 5. status outside [200, 300) → [`NetworkError::HttpStatus`] with the
    ///    exact code, whether or not a body was present;
    /// 6. success status with a body → the body bytes, unmodified;
    /// 7. success status with an empty body → [`NetworkError::EmptyResponse`].
    pub async fn send(&self, request: &HttpRequest) -> Result<Bytes, NetworkError> {
        let transport_request = self.create(request)?;

        debug!(
            method = request.method().as_str(),
            url = %transport_request.url(),
            "sending request"
        );

        let response = self
            .http
            .execute(transport_request)
            .await
            .map_err(|e| self.classify_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "server returned error status");
            return Err(NetworkError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify_transport(e))?;

        if body.is_empty() {
            return Err(NetworkError::EmptyResponse);
        }

        Ok(body)
    }

    /// Execute a request and decode the response body into `T`.
    ///
    /// Delegates to [`send`](Self::send); a failure of the raw call passes
    /// through unchanged, a decode failure becomes
    /// [`NetworkError::Parsing`].
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
    ) -> Result<T, NetworkError> {
        let body = self.send(request).await?;
        parse(&body)
    }

    /// Issue a request in the background and deliver the raw result on
    /// `context`.
    ///
    /// The returned [`NetworkTask`] cancels the call; a cancelled call's
    /// callback never fires. Construction failures (missing endpoint)
    /// reach the callback as typed errors without the transport ever
    /// being invoked. The callback is invoked at most once.
    pub fn dispatch<F>(
        &self,
        request: HttpRequest,
        context: CompletionContext,
        on_response: F,
    ) -> NetworkTask
    where
        F: FnOnce(Result<Bytes, NetworkError>) + Send + 'static,
    {
        let client = self.clone();
        let worker = tokio::spawn(async move {
            let result = client.send(&request).await;
            context.deliver(move || on_response(result));
        });

        NetworkTask::new(worker.abort_handle())
    }

    /// Issue a request in the background and deliver the decoded result on
    /// `context`.
    ///
    /// Delegates to [`dispatch`](Self::dispatch); failures of the raw call
    /// pass through unchanged, a decode failure becomes
    /// [`NetworkError::Parsing`].
    pub fn dispatch_json<T, F>(
        &self,
        request: HttpRequest,
        context: CompletionContext,
        on_response: F,
    ) -> NetworkTask
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T, NetworkError>) + Send + 'static,
    {
        self.dispatch(request, context, move |result| {
            on_response(result.and_then(|body| parse(&body)));
        })
    }

    /// Build a transport request from a descriptor.
    ///
    /// The service token header is stamped exactly once, payload or not.
    fn create(&self, request: &HttpRequest) -> Result<reqwest::Request, NetworkError> {
        let endpoint = request.endpoint().ok_or(NetworkError::MissingEndpoint)?;

        let mut transport_request =
            reqwest::Request::new(request.method().into(), endpoint.clone());

        let headers = transport_request.headers_mut();
        headers.insert(AUTH_HEADER, self.token.clone());

        if let Some(payload) = request.payload() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *transport_request.body_mut() = Some(payload.to_vec().into());
        }

        Ok(transport_request)
    }

    fn classify_transport(&self, error: reqwest::Error) -> NetworkError {
        if error.is_timeout() {
            NetworkError::Timeout {
                seconds: self.config.timeout_seconds.seconds(),
            }
        } else if error.is_connect() {
            NetworkError::Unreachable(error)
        } else {
            NetworkError::Transport(error)
        }
    }
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, NetworkError> {
    serde_json::from_slice(body).map_err(NetworkError::Parsing)
}
