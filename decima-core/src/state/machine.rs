//! Stopwatch state aggregate
//!
//! Plain data plus the four mutations the tasks are allowed to make. Every
//! method is O(1) so critical sections stay short.

use super::events::{ResetOutcome, TickOutcome};

/// Elapsed time and run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchState {
    /// Tenths of a second since the last reset
    elapsed_tenths: u32,
    /// Counting when true
    running: bool,
    /// Reset pressed while stopped, not yet applied by the display task
    reset_requested: bool,
}

/// Copy of the state taken by the display task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub elapsed_tenths: u32,
    /// A pending reset was consumed while taking this snapshot
    pub reset_applied: bool,
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwatchState {
    /// Power-on state: stopped at zero, no reset pending
    pub const fn new() -> Self {
        Self {
            elapsed_tenths: 0,
            running: false,
            reset_requested: false,
        }
    }

    pub fn elapsed_tenths(&self) -> u32 {
        self.elapsed_tenths
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }

    /// Flip the run flag, returning the new value
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Request a reset; only honoured while stopped
    pub fn request_reset(&mut self) -> ResetOutcome {
        if self.running {
            ResetOutcome::IgnoredWhileRunning
        } else {
            self.reset_requested = true;
            ResetOutcome::Requested
        }
    }

    /// Advance one tenth if running
    ///
    /// The counter wraps at 2^32 tenths (about 13,600 years).
    pub fn tick(&mut self) -> TickOutcome {
        if self.running {
            self.elapsed_tenths = self.elapsed_tenths.wrapping_add(1);
            TickOutcome::Advanced(self.elapsed_tenths)
        } else {
            TickOutcome::Stopped
        }
    }

    /// Read the counter, applying and clearing any pending reset
    pub fn take_snapshot(&mut self) -> Snapshot {
        let reset_applied = self.reset_requested;
        if reset_applied {
            self.elapsed_tenths = 0;
            self.reset_requested = false;
        }
        Snapshot {
            elapsed_tenths: self.elapsed_tenths,
            reset_applied,
        }
    }
}
