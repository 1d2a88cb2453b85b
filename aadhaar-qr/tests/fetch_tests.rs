// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for HTTP retrieval against a local responder

#![cfg(feature = "network")]

mod common;

use aadhaar_qr::*;
use common::fixtures::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves the same canned response to every connection.
async fn serve(status: &'static str, content_type: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}/")
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&QrConfig::default()).unwrap()
}

#[tokio::test]
async fn test_fetch_key_pem() {
    let url = serve("200 OK", "text/plain", TEST_KEY_PKCS8.to_string()).await;

    let key = TestKey::fetch(&fetcher(), &url).await.unwrap();
    assert_eq!(key.fingerprint(), test_key().fingerprint());
}

#[tokio::test]
async fn test_fetch_key_http_error() {
    let url = serve("404 Not Found", "text/plain", "missing".to_string()).await;

    let result = TestKey::fetch(&fetcher(), &url).await;
    assert!(matches!(
        result,
        Err(SignerError::Fetch(FetchError::HttpError(404)))
    ));
}

#[tokio::test]
async fn test_fetch_key_too_large() {
    let url = serve("200 OK", "text/plain", "A".repeat(2048)).await;
    let config = QrConfig {
        max_key_size: 1024,
        ..Default::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();

    let result = fetcher.fetch_text(&url).await;
    assert!(matches!(
        result,
        Err(FetchError::TooLarge {
            size: 2048,
            max: 1024
        })
    ));
}

#[tokio::test]
async fn test_payload_source_reads_json() {
    let body = r#"{"testQRData":"987654321","name":"Test Name"}"#.to_string();
    let url = serve("200 OK", "application/json", body).await;

    let source = HttpPayloadSource::new(fetcher(), url);
    let payload = source.fetch_payload().await.unwrap();

    assert_eq!(payload.test_qr_data, "987654321");
    assert_eq!(payload.fields.name, "Test Name");
}

#[tokio::test]
async fn test_payload_source_bad_json() {
    let url = serve("200 OK", "application/json", "{not json".to_string()).await;

    let source = HttpPayloadSource::new(fetcher(), url);
    let result = source.fetch_payload().await;
    assert!(matches!(result, Err(FetchError::JsonError(_))));
}

#[tokio::test]
async fn test_generator_http_500() {
    let url = serve("500 Internal Server Error", "text/plain", "boom".to_string()).await;
    let generator = QrGenerator::new(HttpPayloadSource::new(fetcher(), url));

    let result = generator.generate().await;
    assert!(matches!(
        result,
        Err(GenerateError::Fetch(FetchError::HttpError(500)))
    ));

    let state = generator.state();
    assert!(state.qr_code_url.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_generator_renders_fetched_payload() {
    let payload = build_test_qr(
        &sample_qr_data(),
        &TestOverrides::new("01-01-1990", "560001", "M", "KA"),
        &test_key(),
    )
    .unwrap();
    let body = serde_json::to_string(&payload).unwrap();
    let url = serve("200 OK", "application/json", body).await;

    let generator = QrGenerator::new(HttpPayloadSource::new(fetcher(), url));
    generator.generate().await.unwrap();

    let state = generator.state();
    assert!(state.qr_code_url.is_some());
    assert_eq!(state.payload, Some(payload));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = fetcher().fetch_text(&format!("http://{addr}/")).await;
    assert!(matches!(result, Err(FetchError::NetworkError(_))));
}
