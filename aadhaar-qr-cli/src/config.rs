//! CLI Configuration

use std::time::Duration;

use aadhaar_qr::QrConfig;
use tracing_subscriber::EnvFilter;

/// Log directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "aadhaar_qr=info,aadhaar_qr_cli=info";

/// Builds the log filter from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> EnvFilter {
    parse_log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn parse_log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Test key URL.
    pub key_url: String,
    /// Fresh QR endpoint.
    pub endpoint: String,
    /// Optional proxy URL.
    pub proxy: Option<String>,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl CliConfig {
    /// Builds the library configuration.
    pub fn qr_config(&self) -> QrConfig {
        let config = QrConfig::default()
            .with_key_url(&self.key_url)
            .with_fresh_qr_url(&self.endpoint)
            .with_timeout(Duration::from_secs(self.timeout_secs));

        match &self.proxy {
            Some(proxy) => config.with_proxy(proxy.clone()),
            None => config,
        }
    }
}
