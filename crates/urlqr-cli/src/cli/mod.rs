//! CLI for urlqr.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use urlqr_core::config::{self, UrlqrConfig};

use commands::run_generate;

/// Generate a QR code PNG from a URL.
#[derive(Debug, Parser)]
#[command(name = "urlqr")]
#[command(about = "Generate a QR code PNG from a URL", long_about = None)]
pub struct Cli {
    /// The URL to generate a QR code for. `https://` is added when no scheme is given.
    pub url: String,

    /// Custom filename (default: derived from the URL's host and path).
    #[arg(long)]
    pub filename: Option<String>,

    /// Output directory; must already exist (default: `output_dir` from config, "qrcodes").
    #[arg(long, value_name = "DIR")]
    pub output_path: Option<PathBuf>,

    /// Do not open the saved image in the platform viewer.
    #[arg(long)]
    pub no_open: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        run_generate(&cli, load_config, &mut io::stdout().lock())?;
        Ok(())
    }

    /// Directory to write into: the flag if given, else the configured default.
    pub fn output_dir(&self, cfg: &UrlqrConfig) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&cfg.output_dir))
    }
}

/// Loads the user config, falling back to defaults when it cannot be read or created.
fn load_config() -> UrlqrConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::warn!("could not load config, using defaults: {:#}", e);
            UrlqrConfig::default()
        }
    }
}

#[cfg(test)]
mod tests;
