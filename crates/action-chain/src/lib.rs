//! Scripted, turn-by-turn action chains for a grid warrior.
//!
//! A plan is a fixed, hand-authored sequence of primitive behaviors. Every
//! turn the chain fast-forwards past steps whose goal already holds and
//! issues exactly one command for the first step that still needs work.
//!
//! - **One command per turn**: a turn either issues one command or, once the
//!   plan is exhausted, none at all
//! - **No bookkeeping of turn counts**: how long a step lasts is decided by
//!   what the warrior perceives, re-read every turn
//! - **Borrowed agent**: the agent handle is lent for one turn via
//!   [`Behavior::bind`] and never stored
//!
//! # Architecture
//!
//! - [`Behavior`]: uniform `is_complete` / `execute` interface
//! - [`Action`]: closed set of primitive variants plus the nested [`ActionsChain`]
//! - [`ActionsChain`]: ordered steps with a monotonic cursor
//! - [`perception`]: free helper queries over an [`Agent`](warrior_core::Agent)
//! - [`Status`]: what a single `execute` call did

pub mod action;
pub mod behavior;
pub mod builder;
pub mod chain;
pub mod perception;
pub mod status;

// Re-export core types for ergonomic API
pub use action::{Action, ActionKind, RescuePolicy, RestThreshold};
pub use behavior::{Behavior, Bound};
pub use chain::ActionsChain;
pub use status::Status;
