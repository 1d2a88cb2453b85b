// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Aadhaar QR Library
//!
//! Builds signed test QR codes for Anon Aadhaar demos.
//!
//! A scanned identity QR is decoded, rewritten into a `V2` test record with
//! caller-supplied overrides, re-signed with a publicly known RSA test key,
//! and encoded again into a QR payload. All cryptographic operations use the
//! audited `ring` crate.
//!
//! The test key is a published fixture. Nothing produced here is a valid
//! production identity.

pub mod codec;
pub mod compose;
pub mod config;
pub mod encoder;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod record;
pub mod render;
pub mod seed;
pub mod signer;

pub use codec::{decode_qr_data, encode_qr_data, CodecError};
pub use compose::{compose_v2_test_data, TestOverrides};
pub use config::QrConfig;
pub use encoder::{build_test_qr, QrPayload, SignedPayload};
pub use error::{Error, Result};
pub use fetch::{FetchError, HttpFetcher};
#[cfg(feature = "network")]
pub use generator::HttpPayloadSource;
pub use generator::{GenerateError, GeneratorState, PayloadSource, QrGenerator};
pub use record::{
    IdField, IdentityFields, RawIdentityRecord, RecordError, SIGNATURE_LEN, VERSION_TAG,
};
pub use render::RenderError;
pub use seed::generate_seed;
pub use signer::{public_key_from_pem, verify_signature, SignerError, TestKey};
