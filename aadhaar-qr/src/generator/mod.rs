// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live QR Generator
//!
//! Fetches a pre-signed test QR from a [`PayloadSource`] and renders it as
//! a PNG data URL for display.
//!
//! Display state is shared between overlapping calls. Each call renders
//! into its own buffers and stores the result when it resolves, so the last
//! call to resolve wins. `loading` stays set while any call is in flight.

#[cfg(feature = "network")]
mod http;

#[cfg(feature = "network")]
pub use http::HttpPayloadSource;

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::{error, info};

use crate::encoder::QrPayload;
use crate::fetch::FetchError;
use crate::render::to_data_url;

/// Errors returned by [`QrGenerator::generate`].
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Something went wrong when fetching new QR code: {0}")]
    Fetch(#[from] FetchError),
}

/// Source of freshly signed test QR payloads.
pub trait PayloadSource {
    /// Fetches one payload.
    fn fetch_payload(&self) -> impl Future<Output = Result<QrPayload, FetchError>> + Send;
}

/// What a front-end displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorState {
    /// PNG data URL of the last rendered code.
    pub qr_code_url: Option<String>,
    /// Payload behind `qr_code_url`.
    pub payload: Option<QrPayload>,
    /// True while a fetch is in flight.
    pub loading: bool,
}

#[derive(Default)]
struct Inner {
    state: GeneratorState,
    in_flight: usize,
}

/// Fetch-and-render driver holding the display state.
pub struct QrGenerator<S> {
    source: S,
    inner: Mutex<Inner>,
}

impl<S: PayloadSource> QrGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Snapshot of the display state.
    pub fn state(&self) -> GeneratorState {
        self.lock().state.clone()
    }

    /// Fetches and renders one fresh test QR.
    ///
    /// A failed fetch is returned with `loading` cleared and the previous
    /// image kept. A render failure is logged only.
    pub async fn generate(&self) -> Result<(), GenerateError> {
        self.begin();
        let fetched = self.source.fetch_payload().await;

        let payload = match fetched {
            Ok(payload) => payload,
            Err(e) => {
                self.finish(None);
                return Err(e.into());
            }
        };

        match to_data_url(&payload.test_qr_data) {
            Ok(url) => {
                self.finish(Some((url, payload)));
                info!("QR code generated");
            }
            Err(e) => {
                self.finish(None);
                error!(error = %e, "Error generating QR code");
            }
        }
        Ok(())
    }

    fn begin(&self) {
        let mut inner = self.lock();
        inner.in_flight += 1;
        inner.state.loading = true;
    }

    fn finish(&self, rendered: Option<(String, QrPayload)>) {
        let mut inner = self.lock();
        if let Some((url, payload)) = rendered {
            inner.state.qr_code_url = Some(url);
            inner.state.payload = Some(payload);
        }
        inner.in_flight = inner.in_flight.saturating_sub(1);
        inner.state.loading = inner.in_flight > 0;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Poisoning is ignored: every update leaves the state consistent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
