pub mod init;
pub mod plan;
pub mod quiz;
pub mod serve;
pub mod summarize;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use studykit_server::{load_config_from, StudykitConfig};

/// Load config and apply command-line overrides on top.
pub(crate) fn resolve_config(
    bank: Option<PathBuf>,
    models_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<StudykitConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(bank) = bank {
        config.bank_path = Some(bank);
    }
    if let Some(dir) = models_dir {
        config.models_dir = dir;
    }
    Ok(config)
}
