//! Action plan loader.
//!
//! A plan file is a RON list of step variants, in execution order:
//!
//! ```ron
//! [
//!     Rescue(direction: Right, policy: UntilFreed),
//!     Step(Right),
//!     WalkWhileClear(Forward),
//!     Rest(AtLeast(12)),
//!     Chain([Kill(Left), Step(Left)]),
//! ]
//! ```

use std::path::Path;

use action_chain::ActionsChain;

use crate::loaders::{LoadResult, read_file};

/// Loader for action plans from RON files.
pub struct PlanLoader;

impl PlanLoader {
    /// Load a plan from a RON file.
    pub fn load(path: &Path) -> LoadResult<ActionsChain> {
        let content = read_file(path)?;
        let chain = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse plan RON at {:?}: {}", path, e))?;

        tracing::debug!(path = %path.display(), steps = chain.len(), "plan loaded");
        Ok(chain)
    }

    /// Parse a plan from RON text.
    pub fn parse(content: &str) -> LoadResult<ActionsChain> {
        let chain: ActionsChain = ron::from_str(content)?;
        if chain.is_empty() {
            tracing::warn!("plan has no steps; it will never issue a command");
        }
        Ok(chain)
    }

    /// Render a plan back to pretty RON.
    pub fn render(chain: &ActionsChain) -> LoadResult<String> {
        let pretty = ron::ser::PrettyConfig::default();
        Ok(ron::ser::to_string_pretty(chain, pretty)?)
    }
}

#[cfg(test)]
mod tests {
    use action_chain::builder::{chain, kill, rescue_with, rest_until, step, walk_while_clear};
    use action_chain::{ActionKind, RescuePolicy};
    use warrior_core::Direction;

    use super::*;

    #[test]
    fn parses_every_variant() {
        let plan = PlanLoader::parse(
            r#"[
                Rescue(direction: Right, policy: UntilBound),
                Step(Right),
                WalkWhileClear(Forward),
                Rest(AtLeast(12)),
                Rest(Full),
                Kill(Left),
                Shoot(Backward),
                Pivot(Backward),
                Chain([Step(Left)]),
            ]"#,
        )
        .unwrap();

        assert_eq!(plan.len(), 9);
        assert_eq!(plan.cursor(), 0);
        assert_eq!(
            plan.steps()[0],
            rescue_with(Direction::Right, RescuePolicy::UntilBound)
        );
        assert_eq!(plan.steps()[3], rest_until(12));
        assert_eq!(plan.steps()[8], chain(vec![step(Direction::Left)]));
    }

    #[test]
    fn rescue_policy_defaults_to_until_freed() {
        let plan = PlanLoader::parse("[Rescue(direction: Left)]").unwrap();
        assert_eq!(
            plan.steps()[0].kind(),
            &ActionKind::Rescue {
                direction: Direction::Left,
                policy: RescuePolicy::UntilFreed
            }
        );
    }

    #[test]
    fn empty_plan_is_allowed() {
        let plan = PlanLoader::parse("[]").unwrap();
        assert!(plan.is_finished());
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(PlanLoader::parse("[Jump(Forward)]").is_err());
    }

    #[test]
    fn render_then_parse_keeps_plan() {
        let original = ActionsChain::new(vec![
            walk_while_clear(Direction::Backward),
            kill(Direction::Forward),
        ]);
        let text = PlanLoader::render(&original).unwrap();
        assert_eq!(PlanLoader::parse(&text).unwrap(), original);
    }
}
