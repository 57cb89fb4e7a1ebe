//! Print a scenario's plan in a data format.

use action_chain::ActionsChain;
use anyhow::{Context, Result};
use clap::Parser;
use warrior_content::PlanLoader;
use warrior_runtime::Scenario;

/// Print a built-in scenario's plan
#[derive(Parser)]
pub struct Show {
    /// Scenario name (e.g., level-6, level-3)
    #[arg(value_name = "SCENARIO")]
    scenario: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "ron")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// RON, loadable with `warrior check` and `dry-run --plan`
    Ron,
    /// Pretty-printed JSON
    Json,
}

impl Show {
    pub fn execute(self) -> Result<()> {
        let scenario = Scenario::from_name(&self.scenario)?;
        println!("{}", render(&scenario.plan(), self.format)?);
        Ok(())
    }
}

fn render(chain: &ActionsChain, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Ron => PlanLoader::render(chain),
        OutputFormat::Json => {
            serde_json::to_string_pretty(chain).context("Failed to serialize plan as JSON")
        }
    }
}
