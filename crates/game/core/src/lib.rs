//! Agent boundary types shared across the warrior controller crates.
//!
//! `warrior-core` describes the capability surface a controller talks to:
//! what the warrior can perceive ([`Space`], [`Occupant`]), which way it can
//! act ([`Direction`]), and the single primitive it may issue each turn
//! ([`Command`]). The simulation that implements [`Agent`] lives outside this
//! workspace; controllers only ever borrow it for the length of one turn.
pub mod agent;
pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod space;

#[cfg(any(test, feature = "replay"))]
pub mod replay;

pub use agent::Agent;
pub use command::Command;
pub use config::ControllerConfig;
pub use direction::Direction;
pub use error::FrameError;
pub use space::{Occupant, Space, Terrain};

#[cfg(any(test, feature = "replay"))]
pub use replay::{Frame, FrameAgent, IssuedCommand};
