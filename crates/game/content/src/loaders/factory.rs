//! Content factory for loading plans, config and frames from a data directory.

use std::path::{Path, PathBuf};

use action_chain::ActionsChain;
use warrior_core::{ControllerConfig, Frame};

use crate::loaders::{ConfigLoader, FrameLoader, LoadResult, PlanLoader};

/// Content factory that loads warrior content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── plans/
/// │   ├── level_3.ron
/// │   └── level_6.ron
/// └── frames/
///     └── corridor.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load controller configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<ControllerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ControllerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a plan from `plans/{name}.ron`.
    pub fn load_plan(&self, name: &str) -> LoadResult<ActionsChain> {
        PlanLoader::load(&self.plan_path(name))
    }

    /// Load recorded frames from `frames/{name}.ron`.
    pub fn load_frames(&self, name: &str) -> LoadResult<Vec<Frame>> {
        let path = self.data_dir.join("frames").join(format!("{}.ron", name));
        FrameLoader::load(&path)
    }

    pub fn plan_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("plans").join(format!("{}.ron", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plan_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.plan_path("level_6"),
            Path::new("/tmp/data/plans/level_6.ron")
        );
    }

    #[test]
    fn missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), ControllerConfig::default());
    }
}
