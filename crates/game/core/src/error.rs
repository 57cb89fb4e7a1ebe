//! Errors raised by the frame-replay agent.
//!
//! Perception itself has no error path: an empty cell or an empty line of
//! sight is a normal answer, not a failure.

/// Failure to build or advance a [`FrameAgent`](crate::FrameAgent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("frame agent needs at least one frame")]
    Empty,

    #[error("all {frames} recorded frames have been replayed")]
    Exhausted { frames: usize },

    #[error("frame {frame} reports health {health} above max health {max_health}")]
    HealthAboveMax {
        frame: usize,
        health: u32,
        max_health: u32,
    },
}
