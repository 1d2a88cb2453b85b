// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for seed generation

use aadhaar_qr::seed::*;

#[test]
fn test_seed_is_decimal_without_leading_zero() {
    for _ in 0..100 {
        let seed = generate_seed();
        assert!(!seed.is_empty());
        assert!(seed.bytes().all(|b| b.is_ascii_digit()));
        assert!(seed == "0" || !seed.starts_with('0'));
        // At most three digits per byte.
        assert!(seed.len() <= SEED_BYTES * 3);
    }
}

#[test]
fn test_seeds_differ() {
    assert_ne!(generate_seed(), generate_seed());
}

#[test]
fn test_seed_from_bytes_concatenates_decimal_values() {
    assert_eq!(seed_from_bytes(&[1, 23, 255]), "123255");
    assert_eq!(seed_from_bytes(&[10, 0, 7]), "1007");
}

#[test]
fn test_seed_from_bytes_drops_leading_zeros() {
    assert_eq!(seed_from_bytes(&[0, 0, 12]), "12");
    assert_eq!(seed_from_bytes(&[0; SEED_BYTES]), "0");
    assert_eq!(seed_from_bytes(&[]), "0");
}

#[test]
fn test_seed_from_bytes_full_width() {
    let seed = seed_from_bytes(&[255; SEED_BYTES]);
    assert_eq!(seed, "255".repeat(SEED_BYTES));
}
