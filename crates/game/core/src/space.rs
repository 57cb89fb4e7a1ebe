//! Perception results returned by [`Agent::feel`](crate::Agent::feel) and
//! [`Agent::look`](crate::Agent::look).
//!
//! A [`Space`] is a snapshot: it is produced fresh by every query and never
//! tracks the simulation afterwards.

/// Static terrain of a single grid cell.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Terrain {
    #[default]
    Floor,
    Stairs,
    Wall,
}

/// A unit standing in a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    /// Hostile towards the warrior.
    pub enemy: bool,
    /// Tied up and waiting to be rescued.
    pub bound: bool,
}

impl Occupant {
    /// A free hostile unit.
    pub const fn enemy() -> Self {
        Self {
            enemy: true,
            bound: false,
        }
    }

    /// A bound, non-hostile unit waiting for rescue.
    pub const fn captive() -> Self {
        Self {
            enemy: false,
            bound: true,
        }
    }

    /// A free, non-hostile unit.
    pub const fn ally() -> Self {
        Self {
            enemy: false,
            bound: false,
        }
    }

    pub const fn is_enemy(&self) -> bool {
        self.enemy
    }

    pub const fn is_bound(&self) -> bool {
        self.bound
    }
}

/// View of one grid cell as perceived this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Space {
    pub terrain: Terrain,
    pub occupant: Option<Occupant>,
}

impl Space {
    pub const fn floor() -> Self {
        Self {
            terrain: Terrain::Floor,
            occupant: None,
        }
    }

    pub const fn wall() -> Self {
        Self {
            terrain: Terrain::Wall,
            occupant: None,
        }
    }

    pub const fn stairs() -> Self {
        Self {
            terrain: Terrain::Stairs,
            occupant: None,
        }
    }

    /// A floor cell holding `occupant`.
    pub const fn occupied(occupant: Occupant) -> Self {
        Self {
            terrain: Terrain::Floor,
            occupant: Some(occupant),
        }
    }

    /// Returns `true` if the warrior could step into this cell.
    ///
    /// Walls and occupied cells are not empty; stairs are.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none() && !self.is_wall()
    }

    pub fn is_wall(&self) -> bool {
        self.terrain == Terrain::Wall
    }

    /// Returns `true` if a unit stands here.
    pub fn is_unit(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<&Occupant> {
        self.occupant.as_ref()
    }
}
