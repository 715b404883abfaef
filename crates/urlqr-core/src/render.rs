//! QR encoding and rasterization.
//!
//! The encoding parameters are fixed so identical payloads always produce
//! identical pixels. Symbol construction is delegated to the `qrcode` crate;
//! this module only turns its module grid into a grayscale image.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

use crate::error::QrError;

/// Edge length of one module, in pixels.
pub const MODULE_PIXELS: u32 = 20;

/// Quiet zone around the symbol, in modules.
pub const BORDER_MODULES: u32 = 1;

/// Error-correction level used for every symbol.
pub const EC_LEVEL: EcLevel = EcLevel::L;

/// Fill color for dark modules.
pub const FILL: Luma<u8> = Luma([0]);

/// Background and border color.
pub const BACKGROUND: Luma<u8> = Luma([255]);

/// Square grid of modules produced by the encoder.
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    width: usize,
    dark: Vec<bool>,
}

impl ModuleGrid {
    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.dark[y * self.width + x]
    }
}

/// Encodes `payload` at [`EC_LEVEL`], choosing the smallest version that fits.
pub fn encode(payload: &str) -> Result<ModuleGrid, QrError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EC_LEVEL)?;
    tracing::debug!(
        "encoded {} bytes as {:?} ({} modules per side)",
        payload.len(),
        code.version(),
        code.width()
    );
    let width = code.width();
    let dark = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();
    Ok(ModuleGrid { width, dark })
}

/// Rasterizes `grid` with `pixel_size`-pixel modules and a `border`-module
/// quiet zone on every side.
pub fn render(
    grid: &ModuleGrid,
    pixel_size: u32,
    border: u32,
    fill: Luma<u8>,
    background: Luma<u8>,
) -> GrayImage {
    let modules = grid.width() as u32;
    let side = (modules + 2 * border) * pixel_size;
    GrayImage::from_fn(side, side, |px, py| {
        let mx = (px / pixel_size) as i64 - border as i64;
        let my = (py / pixel_size) as i64 - border as i64;
        let inside = (0..modules as i64).contains(&mx) && (0..modules as i64).contains(&my);
        if inside && grid.is_dark(mx as usize, my as usize) {
            fill
        } else {
            background
        }
    })
}

/// Encodes and rasterizes `payload` with the fixed parameters above.
pub fn qr_image(payload: &str) -> Result<GrayImage, QrError> {
    let grid = encode(payload)?;
    Ok(render(&grid, MODULE_PIXELS, BORDER_MODULES, FILL, BACKGROUND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payload_fits_version_one() {
        let grid = encode("hi").unwrap();
        assert_eq!(grid.width(), 21);
    }

    #[test]
    fn longer_payload_grows_version() {
        // 19 bytes exceeds version 1-L byte capacity (17).
        let grid = encode("https://example.com").unwrap();
        assert_eq!(grid.width(), 25);
    }

    #[test]
    fn image_size_includes_border() {
        let img = qr_image("hi").unwrap();
        assert_eq!(img.width(), (21 + 2) * MODULE_PIXELS);
        assert_eq!(img.height(), img.width());
    }

    #[test]
    fn border_is_white_and_finder_corner_is_black() {
        let img = qr_image("hi").unwrap();
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(MODULE_PIXELS - 1, MODULE_PIXELS - 1), BACKGROUND);
        assert_eq!(*img.get_pixel(MODULE_PIXELS, MODULE_PIXELS), FILL);
        let last = img.width() - 1;
        assert_eq!(*img.get_pixel(last, last), BACKGROUND);
    }

    #[test]
    fn render_uses_given_parameters() {
        let grid = ModuleGrid {
            width: 2,
            dark: vec![true, false, false, true],
        };
        let img = render(&grid, 3, 2, Luma([10]), Luma([200]));
        assert_eq!(img.width(), (2 + 4) * 3);
        assert_eq!(*img.get_pixel(6, 6), Luma([10]));
        assert_eq!(*img.get_pixel(9, 6), Luma([200]));
        assert_eq!(*img.get_pixel(9, 9), Luma([10]));
        assert_eq!(*img.get_pixel(0, 0), Luma([200]));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = "a".repeat(4000);
        assert!(matches!(encode(&payload), Err(QrError::Encode(_))));
    }
}
