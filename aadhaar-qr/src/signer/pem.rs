// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! PEM framing.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use zeroize::Zeroizing;

use super::SignerError;

const BEGIN: &str = "-----BEGIN ";
const END: &str = "-----END ";
const DASHES: &str = "-----";

/// A decoded PEM block.
pub struct PemBlock {
    /// Label between the dashes, e.g. `PRIVATE KEY`.
    pub label: String,
    /// Base64-decoded body. Wiped on drop.
    pub der: Zeroizing<Vec<u8>>,
}

/// Strips the PEM framing of the first block in `text` and decodes its body.
pub fn parse_pem(text: &str) -> Result<PemBlock, SignerError> {
    let mut lines = text.lines().map(str::trim);

    let label = lines
        .by_ref()
        .find_map(|line| line.strip_prefix(BEGIN)?.strip_suffix(DASHES))
        .ok_or_else(|| SignerError::InvalidPem("missing BEGIN line".into()))?
        .to_string();

    let footer = format!("{END}{label}{DASHES}");
    let mut body = Zeroizing::new(String::new());
    let mut terminated = false;
    for line in lines {
        if line == footer {
            terminated = true;
            break;
        }
        // Encapsulated headers (RFC 1421) are not used by key files.
        if line.contains(':') {
            return Err(SignerError::InvalidPem("unexpected header line".into()));
        }
        body.push_str(line);
    }

    if !terminated {
        return Err(SignerError::InvalidPem(format!("missing END {label} line")));
    }

    let der = BASE64
        .decode(body.as_bytes())
        .map_err(|e| SignerError::InvalidPem(e.to_string()))?;

    Ok(PemBlock {
        label,
        der: Zeroizing::new(der),
    })
}
