// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Payload Codec
//!
//! An Aadhaar secure QR carries a decimal big integer. Its big-endian bytes
//! are a compressed stream holding the signed identity fields followed by
//! the signature.
//!
//! ```text
//! "1234..." --bigint--> [1f 8b ..] --inflate--> fields || signature
//! ```

mod bigint;
mod compression;

pub use bigint::{bigint_to_bytes, bytes_to_bigint};
pub use compression::{compress, decompress};

use thiserror::Error;

/// Errors that can occur while decoding QR data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("QR data is empty")]
    Empty,

    #[error("QR data is not a decimal integer")]
    NotDecimal,

    #[error("Decompression failed: {0}")]
    Decompression(String),
}

/// Decodes scanned QR text into the raw decompressed record bytes.
pub fn decode_qr_data(qr_data: &str) -> Result<Vec<u8>, CodecError> {
    let compressed = bigint_to_bytes(qr_data)?;
    decompress(&compressed)
}

/// Compresses raw record bytes and renders them as QR text.
pub fn encode_qr_data(raw: &[u8]) -> String {
    bytes_to_bigint(&compress(raw))
}
