//! Turn controller for the warrior.
//!
//! This crate wires a hand-authored [`ActionsChain`](action_chain::ActionsChain)
//! into the once-per-turn entry point the simulation calls. Consumers build a
//! [`Player`] (usually from a [`Scenario`]) and call [`Player::play_turn`]
//! with the fresh agent handle they receive every turn.
//!
//! Modules are organized by responsibility:
//! - [`player`] hosts the controller
//! - [`scenario`] holds the scripted plans, one per level
//! - [`error`] exposes the errors surfaced to callers
pub mod error;
pub mod player;
pub mod scenario;

pub use error::{Result, ScenarioError};
pub use player::Player;
pub use scenario::Scenario;
