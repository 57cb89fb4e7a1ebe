//! The composite action chain.
//!
//! An [`ActionsChain`] runs its steps strictly in order, one command per
//! turn, advancing only when the current step reports completion.

use warrior_core::Agent;

use crate::{Action, Behavior, Status};

/// Ordered steps executed one at a time.
///
/// # Semantics
///
/// Each [`execute`](Behavior::execute) call has two phases:
/// - **Skip**: while the current step reports complete, move the cursor on.
///   This costs no turn, so steps already satisfied by earlier turns (or by
///   a precondition that was true from the start) fall through immediately.
/// - **Act**: execute the current step once. That is the turn's command.
///   If the skip phase ran off the end, the chain is finished and the turn
///   issues nothing.
///
/// The cursor never moves backwards. Once it reaches the step count every
/// later call is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Action>", into = "Vec<Action>"))]
pub struct ActionsChain {
    steps: Vec<Action>,
    cursor: usize,
}

impl ActionsChain {
    /// Creates a chain over `steps`, in execution order.
    ///
    /// An empty chain is valid and finished from the start.
    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    /// Index of the current step; equals [`len`](Self::len) once finished.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current step, or `None` once finished.
    pub fn current(&self) -> Option<&Action> {
        self.steps.get(self.cursor)
    }

    /// `true` iff the cursor has passed the last step.
    ///
    /// Only reflects the cursor as of the last `execute`; querying never
    /// advances it.
    pub fn is_finished(&self) -> bool {
        self.cursor == self.steps.len()
    }

    /// Skip phase: advances past steps that currently report completion.
    fn skip_completed<A: Agent + ?Sized>(&mut self, agent: &A) {
        while let Some(step) = self.current() {
            if !step.is_complete(agent) {
                break;
            }
            tracing::debug!(cursor = self.cursor, step = %step, "step complete, advancing");
            self.cursor += 1;
        }
    }
}

impl From<Vec<Action>> for ActionsChain {
    fn from(steps: Vec<Action>) -> Self {
        Self::new(steps)
    }
}

impl From<ActionsChain> for Vec<Action> {
    fn from(chain: ActionsChain) -> Self {
        chain.steps
    }
}

impl FromIterator<Action> for ActionsChain {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Behavior for ActionsChain {
    fn is_complete<A: Agent + ?Sized>(&self, _agent: &A) -> bool {
        self.is_finished()
    }

    fn execute<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Status {
        assert!(
            self.cursor <= self.steps.len(),
            "chain cursor {} walked past {} steps",
            self.cursor,
            self.steps.len()
        );

        self.skip_completed(&*agent);

        let steps = self.steps.len();
        match self.steps.get_mut(self.cursor) {
            Some(step) => step.execute(agent),
            None => {
                tracing::info!(steps, "chain finished, nothing to issue");
                Status::Idle
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use warrior_core::{Command, Direction, Frame, FrameAgent, Space};

    use super::*;
    use crate::ActionKind;

    fn step(dir: Direction) -> Action {
        Action::new(ActionKind::Step(dir))
    }

    #[test]
    fn empty_chain_is_finished_and_silent() {
        let mut agent = FrameAgent::repeating(Frame::new());
        let mut chain = ActionsChain::default();

        assert!(chain.is_finished());
        assert!(chain.is_complete(&agent));
        for _ in 0..3 {
            assert_eq!(chain.execute(&mut agent), Status::Idle);
        }
        assert!(agent.commands().is_empty());
        assert_eq!(chain.cursor(), 0);
    }

    #[test]
    fn single_shot_steps_run_in_order() {
        let mut agent = FrameAgent::repeating(Frame::new());
        let mut chain = ActionsChain::new(vec![step(Direction::Right), step(Direction::Left)]);

        assert_eq!(
            chain.execute(&mut agent),
            Status::Issued(Command::Walk(Direction::Right))
        );
        assert_eq!(chain.cursor(), 0);
        assert_eq!(
            chain.execute(&mut agent),
            Status::Issued(Command::Walk(Direction::Left))
        );
        assert_eq!(chain.cursor(), 1);
        assert!(!chain.is_finished());

        assert_eq!(chain.execute(&mut agent), Status::Idle);
        assert!(chain.is_finished());
    }

    #[test]
    fn skip_phase_passes_several_satisfied_steps_in_one_turn() {
        let mut agent =
            FrameAgent::repeating(Frame::new().with(Direction::Forward, Space::wall()));
        let mut chain = ActionsChain::new(vec![
            Action::new(ActionKind::WalkWhileClear(Direction::Forward)),
            Action::new(ActionKind::Kill(Direction::Forward)),
            step(Direction::Backward),
        ]);

        assert_eq!(
            chain.execute(&mut agent),
            Status::Issued(Command::Walk(Direction::Backward))
        );
        assert_eq!(chain.cursor(), 2);
        assert_eq!(agent.commands().len(), 1);
    }

    #[test]
    fn querying_does_not_advance() {
        let agent = FrameAgent::repeating(Frame::new().with(Direction::Forward, Space::wall()));
        let chain = ActionsChain::new(vec![Action::new(ActionKind::WalkWhileClear(
            Direction::Forward,
        ))]);

        assert!(!chain.is_complete(&agent));
        assert!(!chain.is_complete(&agent));
        assert_eq!(chain.cursor(), 0);
    }

    #[test]
    fn exhausted_nested_chain_spends_its_turn() {
        let mut agent = FrameAgent::repeating(Frame::new());
        let inner = ActionsChain::new(vec![step(Direction::Left)]);
        let mut chain = ActionsChain::new(vec![
            Action::new(ActionKind::Chain(inner)),
            step(Direction::Right),
        ]);

        assert_eq!(
            chain.execute(&mut agent),
            Status::Issued(Command::Walk(Direction::Left))
        );
        // Inner chain only learns it is exhausted when executed again
        assert_eq!(chain.execute(&mut agent), Status::Idle);
        assert_eq!(chain.cursor(), 0);
        assert_eq!(
            chain.execute(&mut agent),
            Status::Issued(Command::Walk(Direction::Right))
        );
        assert_eq!(chain.cursor(), 1);
        assert_eq!(chain.execute(&mut agent), Status::Idle);
        assert!(chain.is_finished());
        assert_eq!(agent.commands().len(), 2);
    }

    #[test]
    fn noop_spends_its_turn_without_a_command() {
        let mut agent = FrameAgent::repeating(Frame::new());
        let mut chain = ActionsChain::new(vec![
            Action::new(ActionKind::Noop),
            step(Direction::Forward),
        ]);

        assert_eq!(chain.execute(&mut agent), Status::Idle);
        assert_eq!(chain.cursor(), 0);
        assert!(agent.commands().is_empty());

        assert_eq!(
            chain.execute(&mut agent),
            Status::Issued(Command::Walk(Direction::Forward))
        );
        assert_eq!(chain.cursor(), 1);
    }

    #[test]
    fn collects_from_iterator() {
        let chain: ActionsChain = Direction::ALL.into_iter().map(step).collect();
        assert_eq!(chain.len(), 4);
        assert_eq!(
            chain.current().map(Action::kind),
            Some(&ActionKind::Step(Direction::Forward))
        );
    }
}
