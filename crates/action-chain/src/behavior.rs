//! Core behavior trait and the turn-scoped binding.
//!
//! This module defines the [`Behavior`] trait, implemented by every
//! [`Action`](crate::Action) variant and by [`ActionsChain`](crate::ActionsChain).
//! Behaviors never store the agent: it is passed in per call, or lent for a
//! whole turn through [`Behavior::bind`].

use warrior_core::Agent;

use crate::Status;

/// A schedulable unit of warrior behavior.
pub trait Behavior {
    /// Reports whether this behavior has nothing left to do.
    ///
    /// Reads perception through `agent` but never mutates anything: asking
    /// twice in the same turn gives the same answer.
    fn is_complete<A: Agent + ?Sized>(&self, agent: &A) -> bool;

    /// Performs this turn's work, issuing at most one command to `agent`.
    fn execute<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Status;

    /// Lends `agent` to this behavior for the duration of one turn.
    ///
    /// The returned handle borrows both sides; dropping it ends the turn's
    /// binding. Binding again next turn with a fresh handle replaces it.
    fn bind<'a, A: Agent + ?Sized>(&'a mut self, agent: &'a mut A) -> Bound<'a, Self, A>
    where
        Self: Sized,
    {
        Bound {
            behavior: self,
            agent,
        }
    }
}

/// A behavior bound to an agent for one turn.
pub struct Bound<'a, B, A: ?Sized> {
    behavior: &'a mut B,
    agent: &'a mut A,
}

impl<B: Behavior, A: Agent + ?Sized> Bound<'_, B, A> {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.behavior.is_complete(&*self.agent)
    }

    #[inline]
    pub fn execute(&mut self) -> Status {
        self.behavior.execute(&mut *self.agent)
    }

    pub fn behavior(&self) -> &B {
        self.behavior
    }

    /// The agent this turn is bound to, for diagnostics.
    pub fn agent(&mut self) -> &mut A {
        self.agent
    }
}
