// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoded Identity Records
//!
//! A decoded QR is the signed field data followed by a fixed-size RSA
//! signature. Fields are separated by `0xFF`; the photo follows the last
//! delimiter.

mod fields;

pub(crate) use fields::LAST_FOUR_LEN;
pub use fields::{field_spans, FieldSpans, IdField, IdentityFields, DELIMITER, VERSION_TAG};

use thiserror::Error;

use crate::codec::decode_qr_data;
use crate::signer::{verify_signature, SignerError};

/// Length of the trailing signature region (RSA-2048).
pub const SIGNATURE_LEN: usize = 256;

/// Errors that can occur while interpreting a decoded record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record too short: {len} bytes, need more than {}", SIGNATURE_LEN)]
    TooShort { len: usize },

    #[error("Signature is {len} bytes, expected {}", SIGNATURE_LEN)]
    SignatureLength { len: usize },

    #[error("Record is missing field: {0:?}")]
    MissingField(IdField),
}

/// A decoded identity record split into signed data and signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawIdentityRecord {
    signed_data: Vec<u8>,
    signature: Vec<u8>,
}

impl RawIdentityRecord {
    /// Splits decompressed QR bytes into signed data and signature.
    pub fn from_decoded(mut decoded: Vec<u8>) -> Result<Self, RecordError> {
        if decoded.len() <= SIGNATURE_LEN {
            return Err(RecordError::TooShort { len: decoded.len() });
        }

        let signature = decoded.split_off(decoded.len() - SIGNATURE_LEN);
        Ok(Self {
            signed_data: decoded,
            signature,
        })
    }

    /// Decodes scanned QR text and splits the result.
    pub fn from_qr_data(qr_data: &str) -> crate::Result<Self> {
        let decoded = decode_qr_data(qr_data)?;
        Ok(Self::from_decoded(decoded)?)
    }

    /// Field bytes covered by the signature.
    pub fn signed_data(&self) -> &[u8] {
        &self.signed_data
    }

    /// The trailing signature bytes.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Returns true if the record already carries the `V2` tag.
    pub fn is_v2(&self) -> bool {
        self.signed_data.starts_with(VERSION_TAG)
    }

    /// Text view over the identity fields.
    pub fn fields(&self) -> Result<IdentityFields, RecordError> {
        IdentityFields::extract(&self.signed_data)
    }

    /// Verifies the signature against an RSA public key (PKCS#1 DER).
    pub fn verify(&self, public_key_der: &[u8]) -> Result<(), SignerError> {
        verify_signature(public_key_der, &self.signed_data, &self.signature)
    }

    /// Consumes the record, returning the signed data.
    pub fn into_signed_data(self) -> Vec<u8> {
        self.signed_data
    }
}
