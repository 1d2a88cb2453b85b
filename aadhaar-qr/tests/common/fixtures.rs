// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures
//!
//! RSA keys generated for tests only, and a synthetic identity record laid
//! out like a UIDAI secure QR.

use std::io::Write;

use aadhaar_qr::codec::bytes_to_bigint;
use aadhaar_qr::record::{DELIMITER, SIGNATURE_LEN};
use aadhaar_qr::TestKey;
use flate2::write::GzEncoder;
use flate2::Compression;

pub const TEST_KEY_PKCS8: &str = include_str!("../fixtures/test_key_pkcs8.pem");
pub const TEST_KEY_PKCS1: &str = include_str!("../fixtures/test_key_pkcs1.pem");
pub const TEST_PUBLIC_KEY: &str = include_str!("../fixtures/test_public_key.pem");
pub const WEAK_KEY_1024: &str = include_str!("../fixtures/weak_key_1024.pem");
pub const KEY_3072: &str = include_str!("../fixtures/key_3072.pem");

/// Photo bytes with embedded `0xFF` markers, like a JPEG 2000 codestream.
pub const PHOTO: &[u8] = &[0xFF, 0x4F, 0xFF, 0x51, 0x00, 0x2F, 0x00, 0x00, 0xFF, 0xD9];

pub fn test_key() -> TestKey {
    TestKey::from_pem(TEST_KEY_PKCS8).expect("fixture key should import")
}

/// The sixteen text fields of the sample record, in order.
pub fn sample_fields() -> Vec<&'static str> {
    vec![
        "3",
        "269720190308114407437",
        "Sumit Kumar",
        "01-01-1984",
        "M",
        "C/O Ishwar Chand",
        "East Delhi",
        "",
        "B-31, 3rd Floor",
        "",
        "110051",
        "Krishna Nagar",
        "Delhi",
        "",
        "Gandhi Nagar",
        "Krishna Nagar",
    ]
}

/// Builds signed data from text fields and photo bytes.
pub fn build_signed_data(fields: &[&str], photo: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    for field in fields {
        data.extend_from_slice(field.as_bytes());
        data.push(DELIMITER);
    }
    data.extend_from_slice(photo);
    data
}

/// Sample record without its signature.
pub fn sample_signed_data() -> Vec<u8> {
    build_signed_data(&sample_fields(), PHOTO)
}

/// Sample record with a signature from the fixture key.
pub fn sample_decoded() -> Vec<u8> {
    let signed_data = sample_signed_data();
    let signature = test_key().sign(&signed_data).unwrap();
    assert_eq!(signature.len(), SIGNATURE_LEN);

    let mut decoded = signed_data;
    decoded.extend_from_slice(&signature);
    decoded
}

/// Sample record as scanned QR text (gzip, like UIDAI issues it).
pub fn sample_qr_data() -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&sample_decoded()).unwrap();
    bytes_to_bigint(&encoder.finish().unwrap())
}
