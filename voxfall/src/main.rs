//! Runs a scripted voxfall session.

use std::path::Path;

use anyhow::Result;
use voxfall::{VoxfallSession, logger};
use voxfall_core::SandboxConfig;

const CONFIG_PATH: &str = "voxfall_config.json5";

#[tokio::main]
async fn main() -> Result<()> {
    let path = Path::new(CONFIG_PATH);
    let (config, created) = SandboxConfig::load_or_create(path)?;
    logger::init(&config.log_filter)?;
    if created {
        log::info!("Wrote default config to {}", path.display());
    } else {
        log::info!("Loaded config from {}", path.display());
    }
    log::info!("Starting voxfall session");

    let mut session = VoxfallSession::new(config)?;
    session.start();
    let result = session.run().await;
    session.stop().await;

    result
}
