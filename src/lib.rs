// gamesocket-patch - one-shot patcher for the poker backend's game socket module

pub mod error;
pub mod runner;
pub mod steps;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize tracing output for CLI usage
pub fn init_logging() -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    info!("Initializing gamesocket-patch v{}", version());

    Ok(())
}
