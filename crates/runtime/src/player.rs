//! The per-turn controller.

use action_chain::{ActionsChain, Behavior};
use warrior_core::{Agent, ControllerConfig};

use crate::Scenario;

/// Drives one fixed plan, one turn at a time.
///
/// # Turn
///
/// Every call to [`play_turn`](Player::play_turn):
/// 1. Binds the plan to the agent handle supplied for this turn
/// 2. Passes the cursor to [`Agent::think`] (when enabled)
/// 3. Executes the plan, issuing at most one command
/// 4. Passes the cursor to [`Agent::think`] again
///
/// The agent is only borrowed for the call; nothing of it is kept.
#[derive(Clone, Debug)]
pub struct Player {
    chain: ActionsChain,
    config: ControllerConfig,
    turns: u64,
}

impl Player {
    /// Creates a controller for `chain` with the default configuration.
    pub fn new(chain: ActionsChain) -> Self {
        Self {
            chain,
            config: ControllerConfig::default(),
            turns: 0,
        }
    }

    /// Creates a controller running `scenario`'s scripted plan.
    pub fn for_scenario(scenario: Scenario) -> Self {
        tracing::debug!(%scenario, "building scenario plan");
        Self::new(scenario.plan())
    }

    /// Replaces the configuration (builder pattern).
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Plays one turn against the freshly supplied `agent`.
    pub fn play_turn<A: Agent + ?Sized>(&mut self, agent: &mut A) {
        let _span = tracing::debug_span!("turn", turn = self.turns).entered();
        let emit_thoughts = self.config.emit_thoughts;

        let mut turn = self.chain.bind(agent);

        let before = turn.behavior().cursor();
        tracing::debug!(cursor = before, "turn start");
        if emit_thoughts {
            turn.agent().think(&before.to_string());
        }

        let status = turn.execute();

        let after = turn.behavior().cursor();
        match status.command() {
            Some(command) => tracing::debug!(cursor = after, %command, "turn played"),
            None => tracing::debug!(cursor = after, "no command issued"),
        }
        if emit_thoughts {
            turn.agent().think(&after.to_string());
        }

        self.turns += 1;
    }

    /// Index of the current plan step.
    pub fn cursor(&self) -> usize {
        self.chain.cursor()
    }

    /// `true` once the plan has nothing left to issue.
    pub fn is_finished(&self) -> bool {
        self.chain.is_finished()
    }

    /// Turns played so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn chain(&self) -> &ActionsChain {
        &self.chain
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
