// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for remote key and QR retrieval

use std::time::Duration;

/// Published location of the RSA test key.
pub const DEFAULT_KEY_URL: &str =
    "https://anon-aadhaar.s3.ap-south-1.amazonaws.com/testPrivateKey.pem";

/// Endpoint serving freshly signed test QR payloads.
pub const DEFAULT_FRESH_QR_URL: &str =
    "https://nodejs-serverless-function-express-eight-iota.vercel.app/api/get-fresh-qr";

/// Configuration for the HTTP side of the toolkit
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// URL of the PEM-encoded test private key
    pub key_url: String,

    /// URL returning `{ testQRData, ...idFields }`
    pub fresh_qr_url: String,

    /// HTTP timeout for fetches
    pub timeout: Duration,

    /// Maximum key body size (bytes)
    pub max_key_size: u64,

    /// Maximum QR payload body size (bytes)
    pub max_payload_size: u64,

    /// Proxy URL (for Tor support)
    pub proxy_url: Option<String>,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            key_url: DEFAULT_KEY_URL.to_string(),
            fresh_qr_url: DEFAULT_FRESH_QR_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_key_size: 64 * 1024, // 64 KiB
            max_payload_size: 1024 * 1024, // 1 MiB
            proxy_url: None,
        }
    }
}

impl QrConfig {
    /// Configure with Tor proxy
    ///
    /// Uses the default Tor SOCKS5 proxy at 127.0.0.1:9050 and
    /// increases the timeout to 60 seconds to account for Tor latency.
    pub fn with_tor(mut self) -> Self {
        self.proxy_url = Some("socks5://127.0.0.1:9050".to_string());
        self.timeout = Duration::from_secs(60);
        self
    }

    /// Configure with custom proxy
    pub fn with_proxy(mut self, proxy_url: String) -> Self {
        self.proxy_url = Some(proxy_url);
        self
    }

    /// Configure the HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point key retrieval at another URL
    pub fn with_key_url(mut self, key_url: impl Into<String>) -> Self {
        self.key_url = key_url.into();
        self
    }

    /// Point fresh QR retrieval at another URL
    pub fn with_fresh_qr_url(mut self, url: impl Into<String>) -> Self {
        self.fresh_qr_url = url.into();
        self
    }
}
