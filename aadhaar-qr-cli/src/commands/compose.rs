//! Compose Command
//!
//! Rewrites a scanned QR into a re-signed V2 test QR.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use aadhaar_qr::render::to_png;
use aadhaar_qr::{build_test_qr, HttpFetcher, TestKey, TestOverrides};
use anyhow::Result;
use indicatif::ProgressBar;

use crate::config::CliConfig;
use crate::display;

/// Arguments of the compose command.
pub struct ComposeArgs {
    pub qr_data: String,
    pub overrides: TestOverrides,
    pub key_file: Option<PathBuf>,
    pub png: Option<PathBuf>,
    pub show: bool,
}

/// Loads the test key from disk or from the configured URL.
async fn load_key(config: &CliConfig, key_file: Option<&PathBuf>) -> Result<TestKey> {
    if let Some(path) = key_file {
        return Ok(TestKey::from_file(path)?);
    }

    let qr_config = config.qr_config();
    let fetcher = HttpFetcher::new(&qr_config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching test key from {}", qr_config.key_url));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let key = TestKey::fetch(&fetcher, &qr_config.key_url).await;
    spinner.finish_and_clear();

    Ok(key?)
}

/// Builds the test QR and prints `{ testQRData, ...idFields }`.
pub async fn run(config: &CliConfig, args: ComposeArgs) -> Result<()> {
    let key = load_key(config, args.key_file.as_ref()).await?;
    let payload = build_test_qr(&args.qr_data, &args.overrides, &key)?;

    println!("{}", serde_json::to_string_pretty(&payload)?);

    if let Some(path) = &args.png {
        fs::write(path, to_png(&payload.test_qr_data)?)?;
        display::success(&format!("QR image written to {}", path.display()));
    }

    if args.show {
        display::display_qr_code(&payload.test_qr_data);
    }

    Ok(())
}
