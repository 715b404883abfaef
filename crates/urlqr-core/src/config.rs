use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::output::DEFAULT_OUTPUT_DIR;

/// User configuration loaded from `~/.config/urlqr/config.toml`.
///
/// Encoding parameters (module size, border, error correction) are fixed in
/// [`crate::render`] and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlqrConfig {
    /// Directory used when `--output-path` is not given. Must already exist.
    pub output_dir: String,
    /// Open the saved image in the platform viewer after writing it.
    pub open_viewer: bool,
}

impl Default for UrlqrConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            open_viewer: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlqr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlqrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlqrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlqrConfig = toml::from_str(&data)?;
    Ok(cfg)
}
