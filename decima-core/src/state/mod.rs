//! Shared timekeeping state
//!
//! The single source of truth for elapsed time and run state. All three
//! fields live in one aggregate behind one lock, because the reset gating
//! rule reads `running` and writes `reset_requested` in the same critical
//! section.

pub mod events;
pub mod machine;
pub mod shared;

pub use events::{ResetOutcome, TickOutcome};
pub use machine::{Snapshot, StopwatchState};
pub use shared::SharedStopwatch;
