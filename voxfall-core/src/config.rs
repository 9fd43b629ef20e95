//! Sandbox configuration, stored as JSON5.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::fluid::SpreadConfig;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/voxfall_config.json5");

/// Tunables for liquid behaviour, reveal pacing and start-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Largest ring radius a settled liquid cell spreads to.
    pub maximum_spread: u32,
    /// Occupied neighbours a resting block needs for full-radius spread.
    pub edge_threshold: usize,
    /// Delay between reveal waves.
    pub reveal_step_millis: u64,
    /// Level selected at start-up.
    pub starting_level: usize,
    /// Default log filter directive.
    pub log_filter: String,
}

impl SandboxConfig {
    /// Loads the config at `path`, writing the default file there first if it is missing.
    ///
    /// The flag is true when the default file was written.
    pub fn load_or_create(path: &Path) -> Result<(Self, bool), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() {
            let text = fs::read_to_string(path).map_err(io_error)?;
            return Ok((Self::parse(&text, path)?, false));
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
        Ok((Self::default(), true))
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(text).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maximum_spread > 16 {
            return Err(ConfigError::Invalid("Maximum spread must be in range 0..=16"));
        }
        if self.edge_threshold > 8 {
            return Err(ConfigError::Invalid("Edge threshold must be in range 0..=8"));
        }
        if !(1..=1000).contains(&self.reveal_step_millis) {
            return Err(ConfigError::Invalid(
                "Reveal step must be in range 1..=1000 milliseconds",
            ));
        }
        Ok(())
    }

    /// The spread limits for liquid pours.
    #[must_use]
    pub const fn spread(&self) -> SpreadConfig {
        SpreadConfig {
            maximum_spread: self.maximum_spread,
            edge_threshold: self.edge_threshold,
        }
    }

    /// Delay between reveal waves.
    #[must_use]
    pub const fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_millis)
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        let spread = SpreadConfig::default();
        Self {
            maximum_spread: spread.maximum_spread,
            edge_threshold: spread.edge_threshold,
            reveal_step_millis: 20,
            starting_level: 0,
            log_filter: "info".to_string(),
        }
    }
}
