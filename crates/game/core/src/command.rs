use std::fmt;

use crate::Direction;

/// One primitive in-simulation command. The warrior issues at most one per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Walk(Direction),
    Attack(Direction),
    Shoot(Direction),
    Rescue(Direction),
    Rest,
    Pivot(Direction),
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Walk(_) => "walk",
            Command::Attack(_) => "attack",
            Command::Shoot(_) => "shoot",
            Command::Rescue(_) => "rescue",
            Command::Rest => "rest",
            Command::Pivot(_) => "pivot",
        }
    }

    /// Direction the command targets, if it takes one.
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Command::Walk(dir)
            | Command::Attack(dir)
            | Command::Shoot(dir)
            | Command::Rescue(dir)
            | Command::Pivot(dir) => Some(dir),
            Command::Rest => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(dir) => write!(f, "{} {}", self.as_str(), dir),
            None => f.write_str(self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_direction() {
        assert_eq!(Command::Walk(Direction::Forward).to_string(), "walk forward");
        assert_eq!(Command::Rescue(Direction::Left).to_string(), "rescue left");
        assert_eq!(Command::Rest.to_string(), "rest");
    }
}
