//! The `studykit serve` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use studykit_server::AppState;

pub async fn execute(
    bind: Option<String>,
    bank: Option<PathBuf>,
    models_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = super::resolve_config(bank, models_dir, config_path)?;
    if let Some(bind) = bind {
        config.bind = bind;
    }

    let state = Arc::new(AppState::from_config(&config)?);
    studykit_server::run(&config, state).await
}
