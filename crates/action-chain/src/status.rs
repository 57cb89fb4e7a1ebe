//! Status returned by `execute`.

use warrior_core::Command;

/// What a single `execute` call did to the agent.
///
/// # Turn Semantics
///
/// A turn issues at most one command:
/// - Leaves always issue their command when executed
/// - A chain issues its current step's command, or nothing once exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Exactly one command was issued to the agent.
    Issued(Command),

    /// No command was issued this turn.
    ///
    /// For chains: every step is complete and the plan is over.
    Idle,
}

impl Status {
    /// The command issued, if any.
    #[inline]
    pub fn command(self) -> Option<Command> {
        match self {
            Status::Issued(command) => Some(command),
            Status::Idle => None,
        }
    }
}
