//! CLI configuration

use crate::error::CliResult;
use std::path::Path;
use verdict::{HarnessConfig, HarnessError};

/// Load harness configuration from a TOML file.
///
/// A missing file yields the defaults; a file that exists but does not parse
/// is an error.
pub fn load(path: Option<&Path>) -> CliResult<HarnessConfig> {
    let Some(path) = path else {
        return Ok(HarnessConfig::default());
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(HarnessConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: HarnessConfig =
        toml::from_str(&contents).map_err(|e| HarnessError::Config(e.to_string()))?;
    Ok(config)
}
