//! Server configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level studykit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudykitConfig {
    /// Address the server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Question bank file; the built-in bank is used when absent.
    #[serde(default)]
    pub bank_path: Option<PathBuf>,
    /// Directory holding the classifier artifacts.
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

impl Default for StudykitConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            bank_path: None,
            models_dir: default_models_dir(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studykit.toml` in the current directory
/// 2. `~/.config/studykit/config.toml`
///
/// Environment variable overrides: `STUDYKIT_BIND`, `STUDYKIT_BANK`,
/// `STUDYKIT_MODELS_DIR`.
pub fn load_config() -> Result<StudykitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudykitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studykit.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<StudykitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudykitConfig::default(),
    };

    // Apply env var overrides
    if let Ok(bind) = std::env::var("STUDYKIT_BIND") {
        config.bind = bind;
    }
    if let Ok(bank) = std::env::var("STUDYKIT_BANK") {
        config.bank_path = Some(PathBuf::from(bank));
    }
    if let Ok(dir) = std::env::var("STUDYKIT_MODELS_DIR") {
        config.models_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studykit"))
}
