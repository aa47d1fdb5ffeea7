//! studykit-server — the HTTP surface.
//!
//! One form endpoint over an immutable [`state::AppState`]: quiz
//! selection, weekly plan, and summary computed per submission and
//! rendered as a self-contained HTML page.

pub mod config;
pub mod form;
pub mod render;
pub mod routes;
pub mod state;

use std::sync::Arc;

use anyhow::{Context, Result};

pub use config::{load_config, load_config_from, StudykitConfig};
pub use state::AppState;

/// Bind and serve until the process is stopped.
pub async fn run(config: &StudykitConfig, state: Arc<AppState>) -> Result<()> {
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
