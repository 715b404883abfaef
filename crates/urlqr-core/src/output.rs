//! Image Producer: URL in, PNG on disk out.
//!
//! The PNG is encoded in memory, written to `<final>.part`, synced, and then
//! renamed over the final path so a failed run never leaves a truncated
//! image behind.

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Component, Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::QrError;
use crate::render;
use crate::url_model::derive_filename;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "qrcodes";

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    /// Filename used, exactly as written (caller-supplied or derived).
    pub filename: String,
    /// `<output_dir>/<filename>`.
    pub path: PathBuf,
}

/// Path for the temp file: appends `.part` to the final path (e.g. `a.png` → `a.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// `<output_dir>/<filename>`, with any root or drive prefix of `filename`
/// dropped so an absolute name still lands inside `output_dir`.
pub fn path_under(output_dir: &Path, filename: &str) -> PathBuf {
    let relative: PathBuf = Path::new(filename)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    output_dir.join(relative)
}

/// Encodes `url` as a QR code and saves it as a PNG in `output_dir`.
///
/// `filename` is used verbatim when given; otherwise it is derived from the
/// URL with [`derive_filename`]. `output_dir` must already exist. An existing
/// file with the same name is replaced.
pub fn generate_qr_code(
    url: &str,
    filename: Option<&str>,
    output_dir: &Path,
) -> Result<SavedImage, QrError> {
    if url.is_empty() {
        return Err(QrError::EmptyUrl);
    }
    if !output_dir.is_dir() {
        return Err(QrError::MissingOutputDir(output_dir.to_path_buf()));
    }

    let filename = match filename {
        Some(name) => name.to_string(),
        None => derive_filename(url),
    };
    let path = path_under(output_dir, &filename);

    let png = encode_png(url)?;
    write_atomic(&path, &png)?;
    tracing::info!("wrote {} bytes to {}", png.len(), path.display());

    Ok(SavedImage { filename, path })
}

/// Encodes `url` into PNG bytes with the fixed rendering parameters.
pub fn encode_png(url: &str) -> Result<Vec<u8>, QrError> {
    let img = render::qr_image(url)?;
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn write_atomic(final_path: &Path, bytes: &[u8]) -> Result<(), QrError> {
    let tp = temp_path(final_path);
    let result = write_and_sync(&tp, bytes).and_then(|()| {
        std::fs::rename(&tp, final_path).map_err(|e| QrError::io(final_path, e))
    });
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(&tp) {
            tracing::debug!("could not remove {}: {}", tp.display(), e);
        }
    }
    result
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), QrError> {
    let mut f = File::create(path).map_err(|e| QrError::io(path, e))?;
    f.write_all(bytes).map_err(|e| QrError::io(path, e))?;
    f.sync_all().map_err(|e| QrError::io(path, e))?;
    Ok(())
}
