// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP payload source.

use std::future::Future;

use super::PayloadSource;
use crate::config::QrConfig;
use crate::encoder::QrPayload;
use crate::fetch::{FetchError, HttpFetcher};

/// Reads `{ testQRData, ...idFields }` from a JSON endpoint.
#[derive(Clone)]
pub struct HttpPayloadSource {
    fetcher: HttpFetcher,
    url: String,
}

impl HttpPayloadSource {
    pub fn new(fetcher: HttpFetcher, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }

    /// Source for `config.fresh_qr_url`.
    pub fn from_config(config: &QrConfig) -> Result<Self, FetchError> {
        Ok(Self::new(HttpFetcher::new(config)?, &config.fresh_qr_url))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PayloadSource for HttpPayloadSource {
    fn fetch_payload(&self) -> impl Future<Output = Result<QrPayload, FetchError>> + Send {
        self.fetcher.fetch_json(&self.url)
    }
}
