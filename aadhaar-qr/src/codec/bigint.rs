// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decimal big integer <-> byte conversion.

use num_bigint::BigUint;

use super::CodecError;

/// Parses a decimal big integer into its big-endian bytes.
///
/// Surrounding whitespace is ignored. Signs, separators and other radixes
/// are rejected.
pub fn bigint_to_bytes(decimal: &str) -> Result<Vec<u8>, CodecError> {
    let digits = decimal.trim();
    if digits.is_empty() {
        return Err(CodecError::Empty);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::NotDecimal);
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(CodecError::NotDecimal)?;
    Ok(value.to_bytes_be())
}

/// Renders big-endian bytes as a decimal big integer.
///
/// Leading zero bytes do not survive the conversion. Compressed streams
/// always start with a non-zero magic byte, so QR payloads are unaffected.
pub fn bytes_to_bigint(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_str_radix(10)
}
