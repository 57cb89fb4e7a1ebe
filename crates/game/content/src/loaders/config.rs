//! Controller configuration loader.

use std::path::Path;

use warrior_core::ControllerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for controller configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`ControllerConfig::default`].
    pub fn load(path: &Path) -> LoadResult<ControllerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<ControllerConfig> {
        let config: ControllerConfig = toml::from_str(content)?;
        if config.turn_limit == 0 {
            anyhow::bail!("turn_limit must be at least 1");
        }
        Ok(config)
    }
}
