//! The capability surface exposed by the simulation for one warrior.
//!
//! This module defines the [`Agent`] trait. The simulation hands the
//! controller a fresh handle every turn; every call is synchronous and
//! reflects the state of the current turn.

use crate::{Command, Direction, Space};

/// Perception and command surface of a single warrior.
///
/// Perception methods never cache: calling [`feel`](Agent::feel) twice in a
/// turn returns the same snapshot, calling it next turn reflects whatever the
/// simulation did in between. Command methods issue exactly one in-simulation
/// command; the simulation decides whether it has any effect.
pub trait Agent {
    /// Senses the adjacent cell in `direction`.
    fn feel(&self, direction: Direction) -> Space;

    /// Line of sight in `direction`, nearest cell first.
    fn look(&self, direction: Direction) -> Vec<Space>;

    fn walk(&mut self, direction: Direction);

    fn attack(&mut self, direction: Direction);

    fn shoot(&mut self, direction: Direction);

    fn rescue(&mut self, direction: Direction);

    fn rest(&mut self);

    fn pivot(&mut self, direction: Direction);

    fn health(&self) -> u32;

    fn max_health(&self) -> u32;

    /// Diagnostic pass-through to the simulation's log. No effect on play.
    fn think(&mut self, marker: &str);

    /// Issues `command` through the matching primitive method.
    fn perform(&mut self, command: Command) {
        match command {
            Command::Walk(dir) => self.walk(dir),
            Command::Attack(dir) => self.attack(dir),
            Command::Shoot(dir) => self.shoot(dir),
            Command::Rescue(dir) => self.rescue(dir),
            Command::Rest => self.rest(),
            Command::Pivot(dir) => self.pivot(dir),
        }
    }
}
