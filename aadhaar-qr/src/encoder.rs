// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Re-encoder
//!
//! Joins a composed record with its fresh signature, recompresses it, and
//! renders the result as QR text next to the extracted identity fields.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::codec::encode_qr_data;
use crate::compose::{compose_v2_test_data, TestOverrides};
use crate::record::{IdentityFields, RawIdentityRecord, RecordError, SIGNATURE_LEN};
use crate::signer::TestKey;

/// Signed record data followed by its signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedPayload {
    signed_data: Vec<u8>,
    signature: Vec<u8>,
}

impl SignedPayload {
    /// Pairs signed data with its signature.
    ///
    /// The signature must fill the fixed signature region so that decoders
    /// can split the payload again.
    pub fn new(signed_data: Vec<u8>, signature: Vec<u8>) -> Result<Self, RecordError> {
        if signature.len() != SIGNATURE_LEN {
            return Err(RecordError::SignatureLength {
                len: signature.len(),
            });
        }
        Ok(Self {
            signed_data,
            signature,
        })
    }

    /// Signs `signed_data` with the test key.
    pub fn sign(signed_data: Vec<u8>, key: &TestKey) -> crate::Result<Self> {
        let signature = key.sign(&signed_data)?;
        Ok(Self::new(signed_data, signature)?)
    }

    pub fn signed_data(&self) -> &[u8] {
        &self.signed_data
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The uncompressed QR byte layout: data || signature.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.signed_data.len() + self.signature.len());
        bytes.extend_from_slice(&self.signed_data);
        bytes.extend_from_slice(&self.signature);
        bytes
    }
}

/// Serialized test QR: `{ testQRData, ...idFields }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    /// Decimal big integer of the compressed payload.
    #[serde(rename = "testQRData")]
    pub test_qr_data: String,
    #[serde(flatten)]
    pub fields: IdentityFields,
}

impl QrPayload {
    /// Recompresses a signed payload and extracts its identity fields.
    pub fn from_signed(payload: &SignedPayload) -> Result<Self, RecordError> {
        let fields = IdentityFields::extract(payload.signed_data())?;
        Ok(Self {
            test_qr_data: encode_qr_data(&payload.to_bytes()),
            fields,
        })
    }
}

/// Turns a scanned QR into a re-signed `V2` test QR.
///
/// Decode, strip signature, compose, sign, re-encode. Deterministic for a
/// fixed key and input.
pub fn build_test_qr(
    qr_data: &str,
    overrides: &TestOverrides,
    key: &TestKey,
) -> crate::Result<QrPayload> {
    let record = RawIdentityRecord::from_qr_data(qr_data)?;
    let composed = compose_v2_test_data(record.signed_data(), overrides)?;
    let signed = SignedPayload::sign(composed, key)?;
    let payload = QrPayload::from_signed(&signed)?;

    info!(
        reference_id = %payload.fields.reference_id,
        fingerprint = %key.fingerprint(),
        "built test QR"
    );
    Ok(payload)
}
