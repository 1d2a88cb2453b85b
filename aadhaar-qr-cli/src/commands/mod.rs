//! CLI Commands

pub mod compose;
pub mod decode;
pub mod fetch;
pub mod seed;

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

/// Resolves QR input: `-` reads stdin, `@path` reads a file, anything else
/// is the QR text itself.
pub fn read_qr_input(arg: &str) -> Result<String> {
    let text = if arg == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else if let Some(path) = arg.strip_prefix('@') {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    } else {
        arg.to_string()
    };
    Ok(text.trim().to_string())
}
