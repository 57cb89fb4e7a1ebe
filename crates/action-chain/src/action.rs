//! Primitive warrior actions.
//!
//! Each [`ActionKind`] pairs a completion predicate with the one command it
//! issues. Two completion policies recur:
//!
//! - **Single-shot** ([`ActionKind::Step`], [`ActionKind::Pivot`]): complete
//!   only through the sticky `done` flag, which `execute` sets after issuing
//!   its command once.
//! - **Repeat-while** (everything else): complete as soon as a perception
//!   predicate says so. `execute` leaves `done` alone, so the step stays
//!   current turn after turn until the predicate flips.
//!
//! [`ActionKind::Chain`] nests a whole [`ActionsChain`] as a single step.

use std::fmt;

use warrior_core::{Agent, Command, Direction};

use crate::perception::{
    first_unit_in_line, is_adjacent_bound, is_adjacent_empty, is_adjacent_enemy,
};
use crate::{ActionsChain, Behavior, Status};

/// When a rescue step counts as finished.
///
/// Both orientations exist in authored plans and are kept distinct.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RescuePolicy {
    /// Keep rescuing while the adjacent unit is bound; finished once it is not.
    #[default]
    UntilFreed,
    /// Keep rescuing until the adjacent unit reads as bound.
    UntilBound,
}

/// Health target for a rest step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestThreshold {
    /// Rest until health equals max health.
    Full,
    /// Rest until health reaches this value, or max health if that is lower.
    AtLeast(u32),
}

impl RestThreshold {
    /// `true` once `health` needs no more resting.
    pub fn is_satisfied(self, health: u32, max_health: u32) -> bool {
        if health >= max_health {
            return true;
        }
        match self {
            RestThreshold::Full => false,
            RestThreshold::AtLeast(cutoff) => health >= cutoff,
        }
    }
}

/// The closed set of things a plan step can do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Issues nothing and marks itself done on its first execution.
    Noop,
    /// Walks one cell in the direction, once.
    Step(Direction),
    /// Walks toward the direction for as long as the next cell is empty.
    WalkWhileClear(Direction),
    /// Rescues the adjacent unit until `policy` says it is finished.
    Rescue {
        direction: Direction,
        #[cfg_attr(feature = "serde", serde(default))]
        policy: RescuePolicy,
    },
    /// Attacks the adjacent cell for as long as it holds an enemy.
    Kill(Direction),
    /// Shoots along the line for as long as the first unit seen is an enemy.
    Shoot(Direction),
    /// Rests until the threshold is reached.
    Rest(RestThreshold),
    /// Turns to face the direction, once.
    Pivot(Direction),
    /// A nested plan, complete once every one of its steps is.
    Chain(ActionsChain),
}

impl ActionKind {
    /// Short kebab-case name of the variant, for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Noop => "noop",
            ActionKind::Step(_) => "step",
            ActionKind::WalkWhileClear(_) => "walk-while-clear",
            ActionKind::Rescue { .. } => "rescue",
            ActionKind::Kill(_) => "kill",
            ActionKind::Shoot(_) => "shoot",
            ActionKind::Rest(_) => "rest",
            ActionKind::Pivot(_) => "pivot",
            ActionKind::Chain(_) => "chain",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Noop => f.write_str("noop"),
            ActionKind::Step(dir)
            | ActionKind::WalkWhileClear(dir)
            | ActionKind::Kill(dir)
            | ActionKind::Shoot(dir)
            | ActionKind::Pivot(dir) => write!(f, "{} {}", self.label(), dir),
            ActionKind::Rescue { direction, policy } => {
                write!(f, "rescue {} ({})", direction, policy)
            }
            ActionKind::Rest(RestThreshold::Full) => f.write_str("rest to full"),
            ActionKind::Rest(RestThreshold::AtLeast(cutoff)) => write!(f, "rest to {}", cutoff),
            ActionKind::Chain(chain) => write!(f, "chain of {}", chain.len()),
        }
    }
}

/// One step of a plan: what to do plus whether it has been done.
///
/// The `done` flag is sticky. Once set it is never cleared, even if
/// perception later changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ActionKind", into = "ActionKind"))]
pub struct Action {
    kind: ActionKind,
    done: bool,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self { kind, done: false }
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// The sticky flag alone, without consulting perception.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Issues `command` and reports it.
    fn issue<A: Agent + ?Sized>(agent: &mut A, command: Command) -> Status {
        tracing::debug!(%command, "issuing command");
        agent.perform(command);
        Status::Issued(command)
    }
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Self {
        Self::new(kind)
    }
}

impl From<Action> for ActionKind {
    fn from(action: Action) -> Self {
        action.kind
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl Behavior for Action {
    fn is_complete<A: Agent + ?Sized>(&self, agent: &A) -> bool {
        let satisfied = match &self.kind {
            ActionKind::Noop | ActionKind::Step(_) | ActionKind::Pivot(_) => false,
            ActionKind::WalkWhileClear(dir) => !is_adjacent_empty(agent, *dir),
            ActionKind::Rescue { direction, policy } => {
                let bound = is_adjacent_bound(agent, *direction);
                match policy {
                    RescuePolicy::UntilFreed => !bound,
                    RescuePolicy::UntilBound => bound,
                }
            }
            ActionKind::Kill(dir) => !is_adjacent_enemy(agent, *dir),
            ActionKind::Shoot(dir) => {
                !first_unit_in_line(agent, *dir).is_some_and(|unit| unit.is_enemy())
            }
            ActionKind::Rest(threshold) => {
                threshold.is_satisfied(agent.health(), agent.max_health())
            }
            ActionKind::Chain(chain) => chain.is_finished(),
        };

        tracing::trace!(action = %self.kind, satisfied, done = self.done, "completion check");
        satisfied || self.done
    }

    fn execute<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Status {
        match &mut self.kind {
            ActionKind::Noop => {
                self.done = true;
                Status::Idle
            }
            ActionKind::Step(dir) => {
                let status = Self::issue(agent, Command::Walk(*dir));
                self.done = true;
                status
            }
            ActionKind::Pivot(dir) => {
                let status = Self::issue(agent, Command::Pivot(*dir));
                self.done = true;
                status
            }
            ActionKind::WalkWhileClear(dir) => Self::issue(agent, Command::Walk(*dir)),
            ActionKind::Rescue { direction, .. } => {
                Self::issue(agent, Command::Rescue(*direction))
            }
            ActionKind::Kill(dir) => Self::issue(agent, Command::Attack(*dir)),
            ActionKind::Shoot(dir) => Self::issue(agent, Command::Shoot(*dir)),
            ActionKind::Rest(_) => Self::issue(agent, Command::Rest),
            ActionKind::Chain(chain) => {
                let status = chain.execute(agent);
                if chain.is_finished() {
                    self.done = true;
                }
                status
            }
        }
    }
}
