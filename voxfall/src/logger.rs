//! Log output for the session driver.

use anyhow::{Context, Result};
use tracing::subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Installs a formatted tracing subscriber and routes `log` records into it.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter {default_filter:?}"))?;

    let formatter = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    subscriber::set_global_default(formatter)
        .context("a tracing subscriber is already installed")?;
    LogTracer::init().context("a log forwarder is already installed")?;
    Ok(())
}
