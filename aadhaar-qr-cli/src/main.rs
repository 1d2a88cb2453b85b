//! Aadhaar QR CLI
//!
//! Command-line interface for building, fetching and inspecting Anon Aadhaar
//! test QR codes.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use aadhaar_qr::config::{DEFAULT_FRESH_QR_URL, DEFAULT_KEY_URL};
use aadhaar_qr::TestOverrides;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use commands::compose::ComposeArgs;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "aadhaar-qr")]
#[command(version, about = "Anon Aadhaar test QR toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// URL of the PEM-encoded test private key
    #[arg(long, global = true, env = "AADHAAR_QR_KEY_URL", default_value = DEFAULT_KEY_URL)]
    key_url: String,

    /// Endpoint serving freshly signed test QR payloads
    #[arg(
        long,
        global = true,
        env = "AADHAAR_QR_ENDPOINT",
        default_value = DEFAULT_FRESH_QR_URL
    )]
    endpoint: String,

    /// Proxy URL (e.g. socks5://127.0.0.1:9050)
    #[arg(long, global = true, env = "AADHAAR_QR_PROXY")]
    proxy: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the fields of a scanned QR
    Decode {
        /// QR text, `@file`, or `-` for stdin
        qr_data: String,

        /// RSA public key (PEM) to verify the signature against
        #[arg(long)]
        public_key: Option<PathBuf>,

        /// Print fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a scanned QR into a re-signed V2 test QR
    Compose {
        /// QR text, `@file`, or `-` for stdin
        qr_data: String,

        /// Date of birth override (e.g. 01-01-1990)
        #[arg(long)]
        dob: Option<String>,

        /// Pincode override
        #[arg(long)]
        pincode: Option<String>,

        /// Gender override (M, F, T)
        #[arg(long)]
        gender: Option<String>,

        /// State override
        #[arg(long)]
        state: Option<String>,

        /// Reference timestamp override (yyyyMMddHHmmssSSS)
        #[arg(long)]
        timestamp: Option<String>,

        /// Read the test key from a file instead of --key-url
        #[arg(long)]
        key_file: Option<PathBuf>,

        /// Write the QR image to a PNG file
        #[arg(long)]
        png: Option<PathBuf>,

        /// Show the QR code in the terminal
        #[arg(long)]
        show: bool,
    },

    /// Fetch a freshly signed test QR and render it
    Fetch {
        /// Write the QR image to a PNG file
        #[arg(long)]
        png: Option<PathBuf>,

        /// Print the image as a data URL
        #[arg(long)]
        data_url: bool,
    },

    /// Generate a random nullifier seed
    Seed,

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(config::log_filter())
        .init();

    let cli = Cli::parse();

    let config = CliConfig {
        key_url: cli.key_url,
        endpoint: cli.endpoint,
        proxy: cli.proxy,
        timeout_secs: cli.timeout,
    };

    if let Err(e) = run(cli.command, &config).await {
        display::error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Commands, config: &CliConfig) -> Result<()> {
    match command {
        Commands::Decode {
            qr_data,
            public_key,
            json,
        } => {
            let qr_data = commands::read_qr_input(&qr_data)?;
            commands::decode::run(&qr_data, public_key.as_deref(), json)?;
        }
        Commands::Compose {
            qr_data,
            dob,
            pincode,
            gender,
            state,
            timestamp,
            key_file,
            png,
            show,
        } => {
            let args = ComposeArgs {
                qr_data: commands::read_qr_input(&qr_data)?,
                overrides: TestOverrides {
                    date_of_birth: dob,
                    pincode,
                    gender,
                    state,
                    reference_timestamp: timestamp,
                },
                key_file,
                png,
                show,
            };
            commands::compose::run(config, args).await?;
        }
        Commands::Fetch { png, data_url } => {
            commands::fetch::run(config, png, data_url).await?;
        }
        Commands::Seed => commands::seed::run(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "aadhaar-qr", &mut io::stdout());
        }
    }

    Ok(())
}
