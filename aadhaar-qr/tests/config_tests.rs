// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for configuration

use std::time::Duration;

use aadhaar_qr::config::{QrConfig, DEFAULT_FRESH_QR_URL, DEFAULT_KEY_URL};

#[test]
fn test_config_default() {
    let config = QrConfig::default();

    assert_eq!(config.key_url, DEFAULT_KEY_URL);
    assert_eq!(config.fresh_qr_url, DEFAULT_FRESH_QR_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_key_size, 64 * 1024);
    assert_eq!(config.max_payload_size, 1024 * 1024);
    assert!(config.proxy_url.is_none());
}

#[test]
fn test_config_with_tor() {
    let config = QrConfig::default().with_tor();

    assert_eq!(
        config.proxy_url,
        Some("socks5://127.0.0.1:9050".to_string())
    );
    // Longer timeout for Tor
    assert_eq!(config.timeout, Duration::from_secs(60));
}

#[test]
fn test_config_builders() {
    let config = QrConfig::default()
        .with_key_url("http://localhost:8080/key.pem")
        .with_fresh_qr_url("http://localhost:8080/api/get-fresh-qr")
        .with_timeout(Duration::from_secs(5))
        .with_proxy("socks5://10.0.0.1:1080".to_string());

    assert_eq!(config.key_url, "http://localhost:8080/key.pem");
    assert_eq!(config.fresh_qr_url, "http://localhost:8080/api/get-fresh-qr");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.proxy_url.as_deref(), Some("socks5://10.0.0.1:1080"));
}
