//! Perception helpers shared by the primitive actions.
//!
//! Every helper reads straight through the agent; nothing is cached between
//! calls. An absent unit is a normal answer and makes the predicate `false`.

use warrior_core::{Agent, Direction, Occupant, Space};

/// `true` iff the cell in `direction` holds a bound unit.
pub fn is_adjacent_bound<A: Agent + ?Sized>(agent: &A, direction: Direction) -> bool {
    agent
        .feel(direction)
        .occupant()
        .is_some_and(Occupant::is_bound)
}

/// `true` iff the cell in `direction` holds a hostile unit.
pub fn is_adjacent_enemy<A: Agent + ?Sized>(agent: &A, direction: Direction) -> bool {
    agent
        .feel(direction)
        .occupant()
        .is_some_and(Occupant::is_enemy)
}

/// `true` iff the warrior could step into the cell in `direction`.
pub fn is_adjacent_empty<A: Agent + ?Sized>(agent: &A, direction: Direction) -> bool {
    agent.feel(direction).is_empty()
}

/// First unit along the line of sight in `direction`, nearest first.
pub fn first_unit_in_line<A: Agent + ?Sized>(agent: &A, direction: Direction) -> Option<Occupant> {
    agent
        .look(direction)
        .into_iter()
        .find(Space::is_unit)
        .and_then(|space| space.occupant)
}
