use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/nakedbody/config.toml`.
/// Command-line flags override every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NakedBodyConfig {
    /// Directory to save bodies into when none is given on the command line.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Save request bodies by default.
    #[serde(default = "default_true")]
    pub save_requests: bool,
    /// Save response bodies by default.
    #[serde(default = "default_true")]
    pub save_responses: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NakedBodyConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            save_requests: true,
            save_responses: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nakedbody")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NakedBodyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NakedBodyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NakedBodyConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
