//! Fetch Command
//!
//! Downloads a freshly signed test QR and renders it.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use aadhaar_qr::render::to_png;
use aadhaar_qr::{HttpPayloadSource, QrGenerator};
use anyhow::{bail, Result};
use indicatif::ProgressBar;

use crate::config::CliConfig;
use crate::display;

/// Fetches one fresh QR.
pub async fn run(config: &CliConfig, png: Option<PathBuf>, data_url: bool) -> Result<()> {
    let source = HttpPayloadSource::from_config(&config.qr_config())?;
    let generator = QrGenerator::new(source);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching fresh QR from {}", config.endpoint));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = generator.generate().await;
    spinner.finish_and_clear();
    result?;

    let state = generator.state();
    let (Some(url), Some(payload)) = (state.qr_code_url, state.payload) else {
        bail!("Error generating QR code");
    };

    display::display_qr_code(&payload.test_qr_data);
    display::display_fields(&payload.fields);

    if data_url {
        println!("{}", url);
    }

    if let Some(path) = png {
        fs::write(&path, to_png(&payload.test_qr_data)?)?;
        display::success(&format!("QR image written to {}", path.display()));
    }

    display::success("QR code generated");
    Ok(())
}
