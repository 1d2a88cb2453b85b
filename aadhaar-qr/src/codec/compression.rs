// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compression of QR payloads.
//!
//! UIDAI issues gzip streams; re-encoded test payloads are written as zlib.
//! Both are accepted when decoding.

use std::io::{Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::ZlibEncoder;
use flate2::Compression;

use super::CodecError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Compresses a payload into a zlib stream.
pub fn compress(payload: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(payload)
        .expect("Writing to Vec should not fail");
    encoder.finish().expect("Finishing zlib should not fail")
}

/// Decompresses a gzip or zlib stream.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut decompressed = Vec::new();
    let result = if compressed.starts_with(&GZIP_MAGIC) {
        GzDecoder::new(compressed).read_to_end(&mut decompressed)
    } else {
        ZlibDecoder::new(compressed).read_to_end(&mut decompressed)
    };

    result.map_err(|e| CodecError::Decompression(e.to_string()))?;
    Ok(decompressed)
}
