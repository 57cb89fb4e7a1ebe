//! Data-driven plans and loaders.
//!
//! This crate reads warrior content from RON/TOML data files:
//! - Action plans (RON lists of step variants)
//! - Controller configuration (TOML)
//! - Recorded perception frames for dry runs (RON)
//!
//! Loaders produce `action-chain` and `warrior-core` types directly through
//! their serde derives. A freshly loaded plan always starts at its first step.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, FrameLoader, LoadResult, PlanLoader};
