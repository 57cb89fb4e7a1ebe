//! Subcommand implementations.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod dry_run;
mod list;
mod show;

pub use check::Check;
pub use dry_run::DryRun;
pub use list::List;
pub use show::Show;
