//! Recorded perception loader.

use std::path::Path;

use warrior_core::Frame;

use crate::loaders::{LoadResult, read_file};

/// Loader for perception frames from RON files.
pub struct FrameLoader;

impl FrameLoader {
    /// Load frames from a RON file.
    ///
    /// RON format: `Vec<Frame>`, one entry per turn. Every field of a frame
    /// is optional; omitted cells read as empty floor.
    ///
    /// ```ron
    /// [
    ///     (health: 20),
    ///     (adjacent: { Forward: (terrain: Wall) }),
    ///     (adjacent: { Left: (occupant: Some((enemy: true, bound: false))) }, health: 9),
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<Frame>> {
        let content = read_file(path)?;
        let frames = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse frames RON at {:?}: {}", path, e))?;
        Ok(frames)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Frame>> {
        let frames: Vec<Frame> = ron::from_str(content)?;
        if frames.is_empty() {
            anyhow::bail!("frame recording is empty");
        }
        Ok(frames)
    }
}
