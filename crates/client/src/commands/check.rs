//! Validate a plan file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use warrior_content::PlanLoader;
use warrior_runtime::Scenario;

/// Load a RON plan file and report what it contains
#[derive(Parser)]
pub struct Check {
    /// Path to the plan file
    #[arg(value_name = "PLAN")]
    plan: PathBuf,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let chain = PlanLoader::load(&self.plan)?;

        println!("{}: {} steps", self.plan.display(), chain.len());
        for (index, step) in chain.steps().iter().enumerate() {
            println!("  {:>2}  {}", index, step);
        }

        match Scenario::ALL.into_iter().find(|scenario| scenario.plan() == chain) {
            Some(scenario) => println!("matches built-in scenario {}", scenario),
            None => println!("custom plan"),
        }
        Ok(())
    }
}
