//! Scripted plans, one per level.
//!
//! Each scenario is a fixed, hand-authored [`ActionsChain`]. Scenarios share
//! no state: every call to [`Scenario::plan`] builds a fresh chain positioned
//! on its first step.

use action_chain::ActionsChain;
use action_chain::RescuePolicy;
use action_chain::builder::{kill, rescue_with, rest_to_full, step, walk_while_clear};
use warrior_core::Direction::{Backward, Forward, Left, Right};

use crate::error::{Result, ScenarioError};

/// A level with its own scripted plan.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Scenario {
    /// Free the captive to the right, then side-step around an enemy.
    #[strum(to_string = "level-3")]
    Level3,
    /// Free the captive behind, clear the corridor ahead, resting once to full.
    #[strum(to_string = "level-6")]
    Level6,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Level3, Scenario::Level6];

    /// Looks a scenario up by name (`level-3`, `LEVEL-6`, ...).
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|source| ScenarioError::Unknown {
            name: name.to_owned(),
            known: Self::ALL
                .iter()
                .map(Scenario::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })
    }

    /// Builds this scenario's plan from scratch.
    pub fn plan(self) -> ActionsChain {
        match self {
            Scenario::Level3 => level_3(),
            Scenario::Level6 => level_6(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Level3 => "free the captive to the right, then side-step around an enemy",
            Scenario::Level6 => {
                "free the captive behind, clear the corridor ahead, resting once to full"
            }
        }
    }
}

fn level_3() -> ActionsChain {
    ActionsChain::new(vec![
        rescue_with(Right, RescuePolicy::UntilFreed),
        step(Right),
        step(Backward),
        kill(Left),
        step(Left),
        step(Left),
    ])
}

/// Rescue here finishes once the captive reads as bound, which is how this
/// level was authored.
fn level_6() -> ActionsChain {
    ActionsChain::new(vec![
        walk_while_clear(Backward),
        rescue_with(Backward, RescuePolicy::UntilBound),
        walk_while_clear(Forward),
        kill(Forward),
        walk_while_clear(Backward),
        rest_to_full(),
        walk_while_clear(Forward),
        kill(Forward),
        walk_while_clear(Forward),
        kill(Forward),
    ])
}
