// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `NetworkClient`
//!
//! These tests use wiremock to mock HTTP responses and exercise the
//! client's outcome classification, typed decoding, and cancellation
//! behavior against a live socket.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use net_client::{
    AUTH_HEADER, ClientConfig, CompletionContext, HttpRequest, NetworkClient, NetworkError,
    TimeoutSeconds,
};
use serde::Deserialize;
use serde_json::json;
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[derive(Debug, Deserialize)]
struct NftStub {
    id: String,
    name: String,
}

fn create_test_client(server: &MockServer) -> NetworkClient {
    let base = Url::parse(&server.uri()).expect("mock server URI is a valid URL");
    NetworkClient::new(ClientConfig::new(base, "test-token")).expect("client config is valid")
}

fn endpoint(server: &MockServer, path: &str) -> Url {
    Url::parse(&format!("{}{path}", server.uri())).expect("endpoint URL is valid")
}

#[tokio::test]
async fn send_returns_exact_body_bytes() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/nft/123"))
        .and(header(AUTH_HEADER, "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"raw payload".to_vec()))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft/123"));
    let body = client.send(&request).await.unwrap();

    assert_eq!(&body[..], b"raw payload");
}

#[tokio::test]
async fn send_classifies_error_status_with_exact_code() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/nft/123"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft/123"));
    let result = client.send(&request).await;

    match result.unwrap_err() {
        NetworkError::HttpStatus(code) => assert_eq!(code, 404),
        other => panic!("expected HttpStatus error, got: {other:?}"),
    }
}

#[tokio::test]
async fn send_classifies_server_error_without_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/orders/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/orders/1"));
    let result = client.send(&request).await;

    match result.unwrap_err() {
        NetworkError::HttpStatus(code) => assert_eq!(code, 500),
        other => panic!("expected HttpStatus error, got: {other:?}"),
    }
}

#[tokio::test]
async fn send_reports_empty_success_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/profile/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/profile/1"));
    let result = client.send(&request).await;

    assert!(matches!(result, Err(NetworkError::EmptyResponse)));
}

#[tokio::test]
async fn send_classifies_unreachable_server() {
    // Nothing listens on port 9; the connection attempt itself fails.
    let base = Url::parse("http://127.0.0.1:9/").expect("URL is valid");
    let client = NetworkClient::new(ClientConfig::new(base.clone(), "test-token"))
        .expect("client config is valid");

    let request = HttpRequest::get(base.join("api/v1/nft").ok());
    let result = client.send(&request).await;

    match result.unwrap_err() {
        NetworkError::Unreachable(_) => {}
        other => panic!("expected Unreachable error, got: {other:?}"),
    }
}

#[tokio::test]
async fn send_classifies_timeout() {
    let mock_server = MockServer::start().await;

    let base = Url::parse(&mock_server.uri()).expect("mock server URI is a valid URL");
    let mut config = ClientConfig::new(base, "test-token");
    config.timeout_seconds = TimeoutSeconds::new(1).expect("timeout is within bounds");
    let client = NetworkClient::new(config).expect("client config is valid");

    Mock::given(method("GET"))
        .and(path("/api/v1/nft"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft"));
    let result = client.send(&request).await;

    match result.unwrap_err() {
        NetworkError::Timeout { seconds } => assert_eq!(seconds, 1),
        other => panic!("expected Timeout error, got: {other:?}"),
    }
}

#[tokio::test]
async fn send_json_decodes_typed_value() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/nft/123"))
        .and(header(AUTH_HEADER, "test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "123", "name": "Lilo"})),
        )
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft/123"));
    let nft: NftStub = client.send_json(&request).await.unwrap();

    assert_eq!(nft.id, "123");
    assert_eq!(nft.name, "Lilo");
}

#[tokio::test]
async fn send_json_reports_parsing_error_for_malformed_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/nft/123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft/123"));
    let result: Result<NftStub, _> = client.send_json(&request).await;

    assert!(matches!(result, Err(NetworkError::Parsing(_))));
}

#[tokio::test]
async fn send_json_passes_transport_failures_through() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/nft/123"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not json either"))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft/123"));
    let result: Result<NftStub, _> = client.send_json(&request).await;

    // A failed raw call must never be reported as a parsing problem.
    match result.unwrap_err() {
        NetworkError::HttpStatus(code) => assert_eq!(code, 404),
        other => panic!("expected HttpStatus error, got: {other:?}"),
    }
}

#[tokio::test]
async fn send_attaches_json_payload() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let payload = json!({"name": "Alice", "likes": ["1", "2"]});

    Mock::given(method("PUT"))
        .and(path("/api/v1/profile/1"))
        .and(header(AUTH_HEADER, "test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::put(endpoint(&mock_server, "/api/v1/profile/1"))
        .with_json_payload(&payload)
        .unwrap();

    let body = client.send(&request).await.unwrap();
    assert!(!body.is_empty());
}

#[tokio::test]
async fn dispatch_delivers_result_on_completion_context() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let (tx, rx) = tokio::sync::oneshot::channel();
    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/currencies"));

    let task = client.dispatch(request, CompletionContext::current(), move |result| {
        let _ = tx.send(result);
    });

    let result = rx.await.expect("callback fired");
    assert_eq!(&result.unwrap()[..], b"[]");

    // Cancelling after completion is a no-op.
    task.cancel();
}

#[tokio::test]
async fn dispatch_json_decodes_before_delivery() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/nft/123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "123", "name": "Stitch"})),
        )
        .mount(&mock_server)
        .await;

    let (tx, rx) = tokio::sync::oneshot::channel();
    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft/123"));

    client.dispatch_json::<NftStub, _>(request, CompletionContext::current(), move |result| {
        let _ = tx.send(result);
    });

    let nft = rx.await.expect("callback fired").unwrap();
    assert_eq!(nft.id, "123");
}

#[tokio::test]
async fn dispatch_missing_endpoint_reports_typed_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let (tx, rx) = tokio::sync::oneshot::channel();

    client.dispatch(
        HttpRequest::get(None),
        CompletionContext::current(),
        move |result| {
            let _ = tx.send(result);
        },
    );

    let result = rx.await.expect("callback fired");
    assert!(matches!(result, Err(NetworkError::MissingEndpoint)));
}

#[tokio::test]
async fn cancel_before_completion_suppresses_callback() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/nft"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let request = HttpRequest::get(endpoint(&mock_server, "/api/v1/nft"));
    let task = client.dispatch(request, CompletionContext::current(), move |_| {
        flag.store(true, Ordering::SeqCst);
    });

    // Cancel while the mock server is still holding the response.
    tokio::time::sleep(Duration::from_millis(50)).await;
    task.cancel();

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(!fired.load(Ordering::SeqCst), "callback fired after cancel");
    assert!(task.is_finished());
}
