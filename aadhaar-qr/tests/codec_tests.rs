// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for codec

mod common;

use aadhaar_qr::codec::*;
use common::fixtures::{sample_decoded, sample_qr_data};
use proptest::prelude::*;

#[test]
fn test_decode_uidai_gzip_qr() {
    let decoded = decode_qr_data(&sample_qr_data()).unwrap();
    assert_eq!(decoded, sample_decoded());
}

#[test]
fn test_reencoded_qr_decodes() {
    let raw = sample_decoded();
    let qr_data = encode_qr_data(&raw);

    assert!(qr_data.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(decode_qr_data(&qr_data).unwrap(), raw);
}

#[test]
fn test_decode_empty_input() {
    assert_eq!(decode_qr_data(""), Err(CodecError::Empty));
}

#[test]
fn test_decode_not_a_number() {
    assert_eq!(decode_qr_data("hello"), Err(CodecError::NotDecimal));
}

#[test]
fn test_decode_number_that_is_not_compressed() {
    let result = decode_qr_data("123456789");
    assert!(matches!(result, Err(CodecError::Decompression(_))));
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        (CodecError::Empty, "QR data is empty"),
        (CodecError::NotDecimal, "QR data is not a decimal integer"),
        (
            CodecError::Decompression("corrupt deflate stream".into()),
            "Decompression failed: corrupt deflate stream",
        ),
    ];

    for (error, expected) in errors {
        assert_eq!(error.to_string(), expected);
    }
}

proptest! {
    #[test]
    fn prop_compression_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(decompress(&compress(&payload)).unwrap(), payload);
    }
}
