//! Dry-run a plan against recorded perception frames.
//!
//! One turn is played per frame. Nothing is simulated: the frames say what the
//! warrior perceives, the plan decides what it would do.

use std::path::{Path, PathBuf};

use action_chain::ActionsChain;
use anyhow::{Context, Result};
use clap::Parser;
use warrior_content::{ContentFactory, FrameLoader, PlanLoader};
use warrior_core::{Command, ControllerConfig, FrameAgent};
use warrior_runtime::{Player, Scenario};

/// Drive a plan one turn per recorded frame
#[derive(Parser)]
pub struct DryRun {
    /// Built-in scenario to run (e.g., level-6)
    #[arg(
        short,
        long,
        value_name = "NAME",
        conflicts_with = "plan",
        required_unless_present = "plan"
    )]
    scenario: Option<String>,

    /// Plan file to run, or a plan name under the data directory
    #[arg(short, long, value_name = "PLAN")]
    plan: Option<PathBuf>,

    /// Frames file, or a frames name under the data directory
    #[arg(short, long, value_name = "FRAMES")]
    frames: PathBuf,

    /// Override the configured turn limit
    #[arg(short, long, value_name = "TURNS")]
    turn_limit: Option<u32>,
}

/// One played turn.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TurnRecord {
    turn: usize,
    cursor: usize,
    command: Option<Command>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StopReason {
    Finished,
    FramesExhausted,
    TurnLimit,
}

impl StopReason {
    fn describe(self) -> &'static str {
        match self {
            StopReason::Finished => "plan finished",
            StopReason::FramesExhausted => "frames exhausted",
            StopReason::TurnLimit => "turn limit reached",
        }
    }
}

#[derive(Clone, Debug)]
struct DryRunReport {
    turns: Vec<TurnRecord>,
    stop: StopReason,
}

impl DryRun {
    pub fn execute(self, data_dir: Option<&Path>) -> Result<()> {
        let factory = data_dir.map(ContentFactory::new);

        let mut config = match &factory {
            Some(factory) => factory.load_config()?.with_env_overrides(),
            None => ControllerConfig::from_env(),
        };
        if let Some(limit) = self.turn_limit {
            config = config.with_turn_limit(limit);
        }

        let chain = self.load_chain(factory.as_ref())?;
        let frames_path = resolve(&self.frames, factory.as_ref(), "frames");
        let frames = FrameLoader::load(&frames_path)?;
        let mut agent = FrameAgent::new(frames)
            .with_context(|| format!("Invalid frames file {}", frames_path.display()))?;

        let mut player = Player::new(chain).with_config(config);
        let turn_limit = player.config().turn_limit;
        tracing::info!(
            steps = player.chain().len(),
            frames = agent.frame_count(),
            turn_limit,
            "starting dry run"
        );

        let report = drive(&mut player, &mut agent, turn_limit);

        for record in &report.turns {
            let command = record
                .command
                .map(|command| command.to_string())
                .unwrap_or_else(|| "-".to_owned());
            println!(
                "turn {:>3}  cursor {:>2}  {}",
                record.turn, record.cursor, command
            );
        }
        println!(
            "stopped after {} turns: {}",
            report.turns.len(),
            report.stop.describe()
        );
        Ok(())
    }

    fn load_chain(&self, factory: Option<&ContentFactory>) -> Result<ActionsChain> {
        if let Some(name) = &self.scenario {
            return Ok(Scenario::from_name(name)?.plan());
        }
        let plan = self
            .plan
            .as_deref()
            .context("either --scenario or --plan is required")?;
        PlanLoader::load(&resolve(plan, factory, "plans"))
    }
}

/// Plays turns until the plan finishes, the frames run out or `turn_limit`
/// turns have been played.
fn drive(player: &mut Player, agent: &mut FrameAgent, turn_limit: u32) -> DryRunReport {
    let mut turns = Vec::new();

    let stop = loop {
        if turns.len() >= turn_limit as usize {
            break StopReason::TurnLimit;
        }

        let turn = agent.turn();
        player.play_turn(agent);
        turns.push(TurnRecord {
            turn,
            cursor: player.cursor(),
            command: agent.commands_in(turn).next(),
        });

        if player.is_finished() {
            break StopReason::Finished;
        }
        if agent.advance().is_err() {
            break StopReason::FramesExhausted;
        }
    };

    tracing::info!(turns = turns.len(), reason = stop.describe(), "dry run stopped");
    DryRunReport { turns, stop }
}

/// Existing paths and paths with an extension are used as given. Bare names
/// resolve to `<data_dir>/<subdir>/<name>.ron` when a data directory is set.
fn resolve(path: &Path, factory: Option<&ContentFactory>, subdir: &str) -> PathBuf {
    if path.exists() || path.extension().is_some() {
        return path.to_path_buf();
    }
    match factory {
        Some(factory) => factory
            .data_dir()
            .join(subdir)
            .join(path)
            .with_extension("ron"),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use warrior_core::{Direction, Frame};

    use super::*;

    fn data_factory() -> ContentFactory {
        ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"))
    }

    #[test]
    fn level_3_runs_to_completion() {
        let frames = data_factory().load_frames("level_3").unwrap();
        let mut agent = FrameAgent::new(frames).unwrap();
        let mut player = Player::for_scenario(Scenario::Level3);

        let report = drive(&mut player, &mut agent, 200);

        assert_eq!(report.stop, StopReason::Finished);
        assert_eq!(report.turns.len(), 8);
        assert_eq!(
            report.turns[0].command,
            Some(Command::Rescue(Direction::Right))
        );
        assert_eq!(
            report.turns.last(),
            Some(&TurnRecord {
                turn: 7,
                cursor: 6,
                command: None
            })
        );
    }

    #[test]
    fn stops_at_turn_limit() {
        let mut agent = FrameAgent::repeating(Frame::new());
        let mut player = Player::new(ActionsChain::new(vec![
            action_chain::builder::walk_while_clear(Direction::Forward),
        ]));

        let report = drive(&mut player, &mut agent, 3);

        assert_eq!(report.stop, StopReason::TurnLimit);
        assert_eq!(report.turns.len(), 3);
        assert!(
            report
                .turns
                .iter()
                .all(|record| record.command == Some(Command::Walk(Direction::Forward)))
        );
    }

    #[test]
    fn stops_when_frames_run_out() {
        let mut frames = data_factory().load_frames("level_6").unwrap();
        frames.truncate(4);
        let mut agent = FrameAgent::new(frames).unwrap();
        let mut player = Player::for_scenario(Scenario::Level6);

        let report = drive(&mut player, &mut agent, 200);

        assert_eq!(report.stop, StopReason::FramesExhausted);
        assert_eq!(report.turns.len(), 4);
        assert_eq!(report.turns[3].cursor, 3);
    }

    #[test]
    fn bare_names_resolve_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(
            resolve(Path::new("corridor"), Some(&factory), "frames"),
            dir.path().join("frames").join("corridor.ron")
        );
        assert_eq!(
            resolve(Path::new("custom.ron"), Some(&factory), "plans"),
            PathBuf::from("custom.ron")
        );
        assert_eq!(
            resolve(Path::new("corridor"), None, "frames"),
            PathBuf::from("corridor")
        );
    }
}
