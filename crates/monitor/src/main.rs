//! DriveGuard Monitor - Main Entry Point

use monitor::scripted::ScriptedPerception;
use monitor::{init_logging, load_settings, run_session};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== DriveGuard v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting driver monitoring session...");

    let settings = load_settings()?;
    let source = ScriptedPerception::demo();
    run_session(&settings, source).await?;

    Ok(())
}
