//! Builder utilities for ergonomic plan construction.
//!
//! This module provides helper functions to reduce boilerplate when writing
//! plans. Instead of `Action::new(ActionKind::WalkWhileClear(dir))` you can
//! write `walk_while_clear(dir)`.

use warrior_core::Direction;

use crate::{Action, ActionKind, ActionsChain, RescuePolicy, RestThreshold};

/// Walks one cell toward `dir`, once.
#[inline]
pub fn step(dir: Direction) -> Action {
    Action::new(ActionKind::Step(dir))
}

/// Walks toward `dir` every turn until the next cell is not empty.
#[inline]
pub fn walk_while_clear(dir: Direction) -> Action {
    Action::new(ActionKind::WalkWhileClear(dir))
}

/// Rescues toward `dir` while the unit there is still bound.
#[inline]
pub fn rescue(dir: Direction) -> Action {
    rescue_with(dir, RescuePolicy::UntilFreed)
}

/// Rescues toward `dir`, finishing according to `policy`.
#[inline]
pub fn rescue_with(direction: Direction, policy: RescuePolicy) -> Action {
    Action::new(ActionKind::Rescue { direction, policy })
}

/// Attacks toward `dir` while an enemy stands there.
#[inline]
pub fn kill(dir: Direction) -> Action {
    Action::new(ActionKind::Kill(dir))
}

/// Shoots toward `dir` while the first unit in line is an enemy.
#[inline]
pub fn shoot_while_enemy(dir: Direction) -> Action {
    Action::new(ActionKind::Shoot(dir))
}

/// Rests until health is at max.
#[inline]
pub fn rest_to_full() -> Action {
    Action::new(ActionKind::Rest(RestThreshold::Full))
}

/// Rests until health reaches `cutoff`.
#[inline]
pub fn rest_until(cutoff: u32) -> Action {
    Action::new(ActionKind::Rest(RestThreshold::AtLeast(cutoff)))
}

/// Turns to face `dir`, once.
#[inline]
pub fn pivot(dir: Direction) -> Action {
    Action::new(ActionKind::Pivot(dir))
}

/// Nests `steps` as a single step.
#[inline]
pub fn chain(steps: Vec<Action>) -> Action {
    Action::new(ActionKind::Chain(ActionsChain::new(steps)))
}
