//! Frame-scripted agent for tests and offline dry runs.
//!
//! A [`FrameAgent`] answers perception queries from a recorded [`Frame`] per
//! turn and records every command issued against it. It does not simulate
//! anything: the effect of a command shows up only if the next frame says so.

use std::collections::BTreeMap;

use crate::{Agent, Command, Direction, FrameError, Space};

/// Perception recorded for a single turn.
///
/// Directions without an entry in `adjacent` read as empty floor. A direction
/// without an entry in `lines` looks exactly one cell deep, the adjacent one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Frame {
    pub adjacent: BTreeMap<Direction, Space>,
    pub lines: BTreeMap<Direction, Vec<Space>>,
    pub health: u32,
    pub max_health: u32,
}

impl Frame {
    pub const DEFAULT_MAX_HEALTH: u32 = 20;

    /// A frame at full health surrounded by empty floor.
    pub fn new() -> Self {
        Self {
            adjacent: BTreeMap::new(),
            lines: BTreeMap::new(),
            health: Self::DEFAULT_MAX_HEALTH,
            max_health: Self::DEFAULT_MAX_HEALTH,
        }
    }

    pub fn with(mut self, direction: Direction, space: Space) -> Self {
        self.adjacent.insert(direction, space);
        self
    }

    pub fn with_line(mut self, direction: Direction, line: Vec<Space>) -> Self {
        self.lines.insert(direction, line);
        self
    }

    pub fn with_health(mut self, health: u32, max_health: u32) -> Self {
        self.health = health;
        self.max_health = max_health;
        self
    }

    pub fn feel(&self, direction: Direction) -> Space {
        self.adjacent
            .get(&direction)
            .copied()
            .unwrap_or_default()
    }

    pub fn look(&self, direction: Direction) -> Vec<Space> {
        match self.lines.get(&direction) {
            Some(line) => line.clone(),
            None => vec![self.feel(direction)],
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// A command recorded by [`FrameAgent`], tagged with the turn it was issued in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IssuedCommand {
    pub turn: usize,
    pub command: Command,
}

/// Agent that replays recorded perception one frame per turn.
#[derive(Clone, Debug)]
pub struct FrameAgent {
    frames: Vec<Frame>,
    turn: usize,
    commands: Vec<IssuedCommand>,
    thoughts: Vec<(usize, String)>,
}

impl FrameAgent {
    /// Creates an agent positioned on the first of `frames`.
    pub fn new(frames: Vec<Frame>) -> Result<Self, FrameError> {
        if frames.is_empty() {
            return Err(FrameError::Empty);
        }
        if let Some((frame, f)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.health > f.max_health)
        {
            return Err(FrameError::HealthAboveMax {
                frame,
                health: f.health,
                max_health: f.max_health,
            });
        }

        Ok(Self {
            frames,
            turn: 0,
            commands: Vec::new(),
            thoughts: Vec::new(),
        })
    }

    /// Creates an agent that perceives `frame` on every turn.
    pub fn repeating(frame: Frame) -> Self {
        Self {
            frames: vec![frame],
            turn: 0,
            commands: Vec::new(),
            thoughts: Vec::new(),
        }
    }

    /// Moves on to the next recorded frame.
    pub fn advance(&mut self) -> Result<(), FrameError> {
        if self.turn + 1 >= self.frames.len() {
            return Err(FrameError::Exhausted {
                frames: self.frames.len(),
            });
        }
        self.turn += 1;
        Ok(())
    }

    /// Advances like [`advance`](Self::advance), but stays on the last frame
    /// instead of failing once the recording runs out.
    pub fn advance_or_hold(&mut self) {
        if self.turn + 1 < self.frames.len() {
            self.turn += 1;
        }
    }

    /// Replaces the frame perceived this turn.
    pub fn set_frame(&mut self, frame: Frame) {
        self.frames[self.turn] = frame;
    }

    pub fn frame(&self) -> &Frame {
        &self.frames[self.turn]
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn commands(&self) -> &[IssuedCommand] {
        &self.commands
    }

    /// Commands issued during `turn`.
    pub fn commands_in(&self, turn: usize) -> impl Iterator<Item = Command> + '_ {
        self.commands
            .iter()
            .filter(move |issued| issued.turn == turn)
            .map(|issued| issued.command)
    }

    pub fn last_command(&self) -> Option<Command> {
        self.commands.last().map(|issued| issued.command)
    }

    pub fn thoughts(&self) -> &[(usize, String)] {
        &self.thoughts
    }

    fn record(&mut self, command: Command) {
        tracing::trace!(turn = self.turn, %command, "frame agent received command");
        self.commands.push(IssuedCommand {
            turn: self.turn,
            command,
        });
    }
}

impl Agent for FrameAgent {
    fn feel(&self, direction: Direction) -> Space {
        self.frame().feel(direction)
    }

    fn look(&self, direction: Direction) -> Vec<Space> {
        self.frame().look(direction)
    }

    fn walk(&mut self, direction: Direction) {
        self.record(Command::Walk(direction));
    }

    fn attack(&mut self, direction: Direction) {
        self.record(Command::Attack(direction));
    }

    fn shoot(&mut self, direction: Direction) {
        self.record(Command::Shoot(direction));
    }

    fn rescue(&mut self, direction: Direction) {
        self.record(Command::Rescue(direction));
    }

    fn rest(&mut self) {
        self.record(Command::Rest);
    }

    fn pivot(&mut self, direction: Direction) {
        self.record(Command::Pivot(direction));
    }

    fn health(&self) -> u32 {
        self.frame().health
    }

    fn max_health(&self) -> u32 {
        self.frame().max_health
    }

    fn think(&mut self, marker: &str) {
        self.thoughts.push((self.turn, marker.to_owned()));
    }
}
