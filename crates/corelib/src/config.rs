use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::width::HashWidth;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "MEOWHASH_CONFIG";

/// User/CLI-selected hashing parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HashConfig {
    pub width: HashWidth, // 128, 256 or 512
    pub seed: u64,
}

impl HashConfig {
    pub fn new(width: HashWidth, seed: u64) -> Self {
        Self { width, seed }
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(self, width: Option<HashWidth>, seed: Option<u64>) -> Self {
        Self {
            width: width.unwrap_or(self.width),
            seed: seed.unwrap_or(self.seed),
        }
    }
}

/// Parse a seed given as decimal or `0x`-prefixed hex.
pub fn parse_seed(text: &str) -> Result<u64> {
    let t = text.trim();
    let parsed = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => t.parse::<u64>(),
    };
    parsed.with_context(|| format!("seed '{t}' is not a u64"))
}

pub fn load_config(path: &Path) -> Result<HashConfig> {
    let s = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: HashConfig =
        toml::from_str(&s).with_context(|| format!("parsing config {}", path.display()))?;
    debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}

fn env_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Load the file named by `MEOWHASH_CONFIG`, or defaults when unset.
pub fn load_config_or_default() -> HashConfig {
    match env_config_path() {
        Some(path) => load_config(&path).unwrap_or_else(|e| {
            warn!("failed to load config: {e:#}");
            HashConfig::default()
        }),
        None => HashConfig::default(),
    }
}
