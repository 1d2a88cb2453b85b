//! Decode Command
//!
//! Shows the fields of a scanned QR and optionally checks its signature.

use std::fs;
use std::path::Path;

use aadhaar_qr::{public_key_from_pem, IdentityFields, RawIdentityRecord};
use anyhow::{bail, Result};
use serde_json::Value;
use tracing::debug;

use crate::display;

/// Decodes QR text and prints its fields.
///
/// With `json` set, stdout carries only the JSON document. A verified
/// signature is reported as `signatureVerified` inside it.
pub fn run(qr_data: &str, public_key: Option<&Path>, json: bool) -> Result<()> {
    let record = RawIdentityRecord::from_qr_data(qr_data)?;
    let fields = record.fields()?;
    debug!(
        signed_len = record.signed_data().len(),
        v2 = record.is_v2(),
        "decoded record"
    );

    let verified = match public_key {
        Some(path) => {
            let pem = fs::read_to_string(path)?;
            check_signature(&record, &pem, &path.display().to_string())?;
            true
        }
        None => false,
    };

    if json {
        println!("{}", fields_json(&fields, public_key.is_some().then_some(verified))?);
        return Ok(());
    }

    display::display_fields(&fields);
    if record.is_v2() {
        display::info("Record carries the V2 version tag");
    }
    if verified {
        display::success("Signature verified");
    } else {
        display::warning("Signature not checked (pass --public-key)");
    }

    Ok(())
}

/// Fails unless the record's signature matches the PEM public key.
fn check_signature(record: &RawIdentityRecord, pem: &str, source: &str) -> Result<()> {
    let der = public_key_from_pem(pem)?;
    if record.verify(&der).is_err() {
        bail!("Signature does not match {}", source);
    }
    Ok(())
}

/// Renders the fields as pretty JSON, adding `signatureVerified` when a
/// key was checked.
fn fields_json(fields: &IdentityFields, verified: Option<bool>) -> Result<String> {
    let mut value = serde_json::to_value(fields)?;
    if let (Some(verified), Value::Object(map)) = (verified, &mut value) {
        map.insert("signatureVerified".to_string(), Value::Bool(verified));
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
