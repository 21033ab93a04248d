use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;

use gamesocket_patch::runner;

fn main() -> Result<()> {
    // Default to informative output when the caller did not ask for anything
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "gamesocket_patch=info");
    }

    gamesocket_patch::init_logging().context("Failed to initialize logging")?;

    // An optional positional argument overrides the default target path
    let args: Vec<String> = env::args().collect();
    let target = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from(runner::DEFAULT_TARGET)
    };

    info!("Target file: {}", target.display());

    let changed = runner::patch_file(&target)
        .with_context(|| format!("Failed to patch {}", target.display()))?;

    if changed {
        info!("Patch applied");
    } else {
        info!("Nothing to do");
    }

    Ok(())
}
