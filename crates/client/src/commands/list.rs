//! List the built-in scenarios.

use anyhow::Result;
use clap::Parser;
use warrior_runtime::Scenario;

/// List the built-in scenarios with their step counts
#[derive(Parser)]
pub struct List {}

impl List {
    pub fn execute(self) -> Result<()> {
        for scenario in Scenario::ALL {
            println!(
                "{:<10} {:>2} steps  {}",
                scenario.to_string(),
                scenario.plan().len(),
                scenario.description()
            );
        }
        Ok(())
    }
}
