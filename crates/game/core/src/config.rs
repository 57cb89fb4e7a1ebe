use std::env;

/// Controller configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Pass cursor snapshots to [`Agent::think`](crate::Agent::think) before
    /// and after every turn.
    pub emit_thoughts: bool,

    /// Upper bound on turns driven by offline tooling (dry runs).
    pub turn_limit: u32,
}

impl ControllerConfig {
    pub const DEFAULT_TURN_LIMIT: u32 = 200;

    pub fn new() -> Self {
        Self {
            emit_thoughts: true,
            turn_limit: Self::DEFAULT_TURN_LIMIT,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARRIOR_EMIT_THOUGHTS` - Emit cursor snapshots via `think` (default: true)
    /// - `WARRIOR_TURN_LIMIT` - Dry-run turn cap (default: 200, minimum 1)
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Overrides fields with any of the environment variables read by
    /// [`from_env`](Self::from_env) that are set and parse.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(emit) = read_env_bool("WARRIOR_EMIT_THOUGHTS") {
            self.emit_thoughts = emit;
        }
        if let Some(limit) = read_env::<u32>("WARRIOR_TURN_LIMIT") {
            self.turn_limit = limit.max(1);
        }
        self
    }

    pub fn with_thoughts(mut self, emit_thoughts: bool) -> Self {
        self.emit_thoughts = emit_thoughts;
        self
    }

    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = turn_limit.max(1);
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_emit_thoughts() {
        let config = ControllerConfig::default();
        assert!(config.emit_thoughts);
        assert_eq!(config.turn_limit, ControllerConfig::DEFAULT_TURN_LIMIT);
    }

    #[test]
    fn turn_limit_is_at_least_one() {
        let config = ControllerConfig::new().with_turn_limit(0);
        assert_eq!(config.turn_limit, 1);
    }
}
