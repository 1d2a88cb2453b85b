// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Key Signer
//!
//! Signs composed records with the published RSA test key using
//! RSASSA-PKCS1-v1_5 over SHA-256. Signatures are deterministic for a fixed
//! key and message.
//!
//! The key must be RSA-2048 so that the signature exactly fills the
//! record's trailing signature region.

mod pem;

pub use pem::{parse_pem, PemBlock};

use std::fmt;
use std::path::Path;

use ring::digest::{digest, SHA256};
use ring::rand::SystemRandom;
use ring::signature::{
    RsaKeyPair, UnparsedPublicKey, RSA_PKCS1_2048_8192_SHA256, RSA_PKCS1_SHA256,
};
use thiserror::Error;
use tracing::debug;

use crate::fetch::FetchError;
#[cfg(feature = "network")]
use crate::fetch::HttpFetcher;
use crate::record::SIGNATURE_LEN;

const PKCS8_LABEL: &str = "PRIVATE KEY";
const PKCS1_LABEL: &str = "RSA PRIVATE KEY";
const PKCS1_PUBLIC_LABEL: &str = "RSA PUBLIC KEY";

/// Errors that can occur while loading keys or signing.
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Invalid PEM: {0}")]
    InvalidPem(String),

    #[error("Unsupported PEM label: {0}")]
    UnsupportedLabel(String),

    #[error("Key rejected: {0}")]
    KeyRejected(String),

    #[error("Unsupported key size: {bits} bits (expected {})", SIGNATURE_LEN * 8)]
    UnsupportedKeySize { bits: usize },

    #[error("Signing failed")]
    SigningFailed,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Failed to read key file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Key fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// RSA signing key for test records.
pub struct TestKey {
    key_pair: RsaKeyPair,
    rng: SystemRandom,
}

impl TestKey {
    /// Imports a PEM key (`PRIVATE KEY` or `RSA PRIVATE KEY`).
    pub fn from_pem(text: &str) -> Result<Self, SignerError> {
        let block = parse_pem(text)?;
        match block.label.as_str() {
            PKCS8_LABEL => Self::from_pkcs8(&block.der),
            PKCS1_LABEL => Self::from_pkcs1(&block.der),
            other => Err(SignerError::UnsupportedLabel(other.to_string())),
        }
    }

    /// Imports a PKCS#8 DER key.
    pub fn from_pkcs8(der: &[u8]) -> Result<Self, SignerError> {
        let key_pair =
            RsaKeyPair::from_pkcs8(der).map_err(|e| SignerError::KeyRejected(e.to_string()))?;
        Self::from_key_pair(key_pair)
    }

    /// Imports a PKCS#1 `RSAPrivateKey` DER key.
    pub fn from_pkcs1(der: &[u8]) -> Result<Self, SignerError> {
        let key_pair =
            RsaKeyPair::from_der(der).map_err(|e| SignerError::KeyRejected(e.to_string()))?;
        Self::from_key_pair(key_pair)
    }

    /// Reads a PEM key from disk.
    pub fn from_file(path: &Path) -> Result<Self, SignerError> {
        let text = zeroize::Zeroizing::new(std::fs::read_to_string(path)?);
        Self::from_pem(&text)
    }

    /// Downloads a PEM key.
    #[cfg(feature = "network")]
    pub async fn fetch(fetcher: &HttpFetcher, url: &str) -> Result<Self, SignerError> {
        let text = zeroize::Zeroizing::new(fetcher.fetch_text(url).await?);
        let key = Self::from_pem(&text)?;
        tracing::info!(fingerprint = %key.fingerprint(), "loaded remote test key");
        Ok(key)
    }

    fn from_key_pair(key_pair: RsaKeyPair) -> Result<Self, SignerError> {
        let modulus_len = key_pair.public().modulus_len();
        if modulus_len != SIGNATURE_LEN {
            return Err(SignerError::UnsupportedKeySize {
                bits: modulus_len * 8,
            });
        }

        Ok(Self {
            key_pair,
            rng: SystemRandom::new(),
        })
    }

    /// Signs `data` with RSASSA-PKCS1-v1_5 / SHA-256.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignerError> {
        let mut signature = vec![0u8; self.key_pair.public().modulus_len()];
        self.key_pair
            .sign(&RSA_PKCS1_SHA256, &self.rng, data, &mut signature)
            .map_err(|_| SignerError::SigningFailed)?;

        debug!(len = data.len(), "signed test record");
        Ok(signature)
    }

    /// Public key as PKCS#1 `RSAPublicKey` DER.
    pub fn public_key_der(&self) -> Vec<u8> {
        self.key_pair.public().as_ref().to_vec()
    }

    /// Hex SHA-256 of the public key DER.
    pub fn fingerprint(&self) -> String {
        hex::encode(digest(&SHA256, self.key_pair.public().as_ref()))
    }
}

impl fmt::Debug for TestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestKey")
            .field("fingerprint", &self.fingerprint())
            .finish_non_exhaustive()
    }
}

/// Reads an `RSA PUBLIC KEY` PEM block into PKCS#1 DER.
pub fn public_key_from_pem(text: &str) -> Result<Vec<u8>, SignerError> {
    let block = parse_pem(text)?;
    if block.label != PKCS1_PUBLIC_LABEL {
        return Err(SignerError::UnsupportedLabel(block.label));
    }
    Ok(block.der.to_vec())
}

/// Verifies an RSASSA-PKCS1-v1_5 / SHA-256 signature.
pub fn verify_signature(
    public_key_der: &[u8],
    data: &[u8],
    signature: &[u8],
) -> Result<(), SignerError> {
    UnparsedPublicKey::new(&RSA_PKCS1_2048_8192_SHA256, public_key_der)
        .verify(data, signature)
        .map_err(|_| SignerError::InvalidSignature)
}
