//! Error type for slider construction.
//!
//! Runtime operations never fail: out-of-range indices and redundant
//! pause/resume calls are silent no-ops. Only building a slider can go wrong.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// A deck needs at least one card
    #[error("deck must contain at least one card")]
    EmptyDeck,

    /// Dwell duration of zero would advance on every tick
    #[error("dwell duration must be greater than zero")]
    InvalidDwell,

    /// The environment cannot deliver ticks
    #[error("tick scheduler unavailable: {0}")]
    SchedulerUnavailable(String),
}
