//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Get the platform-specific log directory for warrior
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/warrior/logs`
/// - Linux: `~/.cache/warrior/logs` (or `$XDG_CACHE_HOME/warrior/logs`)
/// - Windows: `%LOCALAPPDATA%\warrior\logs`
/// - Fallback: `/tmp/warrior/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "warrior")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/warrior"));

    base_dir.join("logs")
}
