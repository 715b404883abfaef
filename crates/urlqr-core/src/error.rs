//! Error taxonomy for QR generation.

use std::path::PathBuf;

/// Everything that can go wrong between a URL and a saved PNG.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// URL was empty after trimming.
    #[error("URL cannot be empty")]
    EmptyUrl,

    /// Output directory does not exist (it is never created on the caller's behalf).
    #[error("output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// Payload rejected by the QR encoder (e.g. too long for version 40).
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem write, sync or rename failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QrError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QrError::Io {
            path: path.into(),
            source,
        }
    }
}
