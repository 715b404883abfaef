pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod url_model;
pub mod viewer;

pub use error::QrError;
pub use output::{generate_qr_code, SavedImage};
pub use url_model::{derive_filename, normalize_url, NormalizedUrl};
