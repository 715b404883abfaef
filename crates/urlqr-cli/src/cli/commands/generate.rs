//! `urlqr <url>`: normalize the URL, write the QR PNG and report the result.

use anyhow::Result;
use std::io::Write;
use urlqr_core::config::UrlqrConfig;
use urlqr_core::viewer::{self, ViewerOutcome};
use urlqr_core::{generate_qr_code, normalize_url, QrError, SavedImage};

use crate::cli::Cli;

/// Runs one generation and writes user-facing messages to `out`.
///
/// `load_config` is only called once the URL is known to be non-empty, so
/// empty input leaves no trace on disk. Empty input and generation failures
/// are reported on `out` and yield `Ok(None)`; only a failure to write to
/// `out` itself is returned as `Err`.
pub fn run_generate(
    cli: &Cli,
    load_config: impl FnOnce() -> UrlqrConfig,
    out: &mut impl Write,
) -> Result<Option<SavedImage>> {
    let normalized = match normalize_url(&cli.url) {
        Ok(n) => n,
        Err(QrError::EmptyUrl) => {
            writeln!(out, "Error: URL cannot be empty!")?;
            tracing::info!("empty url; nothing to do");
            return Ok(None);
        }
        Err(e) => {
            writeln!(out, "Error generating QR code: {e}")?;
            return Ok(None);
        }
    };

    if normalized.added_scheme {
        writeln!(out, "Added protocol: {}", normalized.url)?;
        tracing::debug!("added protocol to {:?}", cli.url);
    }

    let cfg = load_config();
    let output_dir = cli.output_dir(&cfg);
    let saved = match generate_qr_code(&normalized.url, cli.filename.as_deref(), &output_dir) {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!("generating QR code for {} failed: {}", normalized.url, e);
            writeln!(out, "Error generating QR code: {e}")?;
            return Ok(None);
        }
    };

    writeln!(out, "QR code saved as: {}", saved.path.display())?;

    if cfg.open_viewer && !cli.no_open {
        match viewer::show(&saved.path) {
            ViewerOutcome::Spawned => {}
            other => tracing::info!("image not displayed: {:?}", other),
        }
    }

    Ok(Some(saved))
}
