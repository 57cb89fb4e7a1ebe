//! Errors surfaced by the controller crate.
//!
//! Playing a turn cannot fail: misuse of the chain is a bug and panics.
//! The only recoverable failure is naming a scenario that does not exist.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario {name:?}; expected one of: {known}")]
    Unknown {
        name: String,
        known: String,
        #[source]
        source: strum::ParseError,
    },
}
