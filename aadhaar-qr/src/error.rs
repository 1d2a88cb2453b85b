// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for the test QR pipeline.

use thiserror::Error;

use crate::codec::CodecError;
use crate::fetch::FetchError;
use crate::record::RecordError;
use crate::render::RenderError;
use crate::signer::SignerError;

/// Unified error type for pipeline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// QR text could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Decoded bytes do not have the expected record layout.
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// Key import, signing or verification failed.
    #[error("signer error: {0}")]
    Signer(#[from] SignerError),

    /// Remote retrieval failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// QR image could not be produced.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
