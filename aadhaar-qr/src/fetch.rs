// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP fetcher for the test key and fresh QR payloads
//!
//! This module provides HTTP-based fetching with:
//! - Size limits
//! - Proxy support (for Tor)
//! - Timeout configuration
//!
//! Non-success status codes are reported as errors. There are no retries.

use thiserror::Error;

#[cfg(feature = "network")]
use reqwest::Client;
#[cfg(feature = "network")]
use serde::de::DeserializeOwned;
#[cfg(feature = "network")]
use tracing::{debug, warn};

use crate::config::QrConfig;

/// Fetches remote resources
#[cfg(feature = "network")]
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    max_key_size: u64,
    max_payload_size: u64,
}

#[cfg(feature = "network")]
impl HttpFetcher {
    /// Create a new fetcher from config
    pub fn new(config: &QrConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().timeout(config.timeout).user_agent(format!(
            "aadhaar-qr/{}",
            option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
        ));

        // Support proxy if configured (for Tor)
        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            max_key_size: config.max_key_size,
            max_payload_size: config.max_payload_size,
        })
    }

    /// Fetch a text body (e.g. a PEM key)
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let data = self.fetch_bytes(url, self.max_key_size).await?;
        String::from_utf8(data).map_err(|_| FetchError::NotUtf8)
    }

    /// Fetch and parse a JSON body
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let data = self.fetch_bytes(url, self.max_payload_size).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    async fn fetch_bytes(&self, url: &str, max_size: u64) -> Result<Vec<u8>, FetchError> {
        debug!(%url, "fetching");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!(%url, status = response.status().as_u16(), "fetch rejected");
            return Err(FetchError::HttpError(response.status().as_u16()));
        }

        // Check content length before downloading
        if let Some(len) = response.content_length() {
            if len > max_size {
                return Err(FetchError::TooLarge {
                    size: len,
                    max: max_size,
                });
            }
        }

        let data = response.bytes().await?.to_vec();

        // Verify size after download (in case content-length was missing)
        if data.len() as u64 > max_size {
            return Err(FetchError::TooLarge {
                size: data.len() as u64,
                max: max_size,
            });
        }

        Ok(data)
    }
}

/// Stub fetcher when the network feature is not enabled
#[cfg(not(feature = "network"))]
pub struct HttpFetcher {
    _private: (),
}

#[cfg(not(feature = "network"))]
impl HttpFetcher {
    /// Create a new fetcher (stub - always fails)
    pub fn new(_config: &QrConfig) -> Result<Self, FetchError> {
        Err(FetchError::FeatureDisabled)
    }
}

/// Errors that can occur during fetching
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network/request error
    #[cfg(feature = "network")]
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Body too large
    #[error("Content too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// Body is not valid UTF-8
    #[error("Response body is not UTF-8")]
    NotUtf8,

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network feature is not enabled
    #[error("Network feature is not enabled")]
    FeatureDisabled,
}
