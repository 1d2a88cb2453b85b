// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Random seed values for proof nullifiers.

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes behind a seed.
pub const SEED_BYTES: usize = 16;

/// Generates a fresh decimal seed from 16 random bytes.
pub fn generate_seed() -> String {
    let mut bytes = [0u8; SEED_BYTES];
    OsRng.fill_bytes(&mut bytes);
    seed_from_bytes(&bytes)
}

/// Concatenates the decimal value of each byte and reads the result as a
/// big integer, so leading zeros are dropped.
///
/// ```
/// use aadhaar_qr::seed::seed_from_bytes;
///
/// assert_eq!(seed_from_bytes(&[0, 7, 255]), "7255");
/// ```
pub fn seed_from_bytes(bytes: &[u8]) -> String {
    let digits: String = bytes.iter().map(u8::to_string).collect();
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .unwrap_or_default()
        .to_string()
}
