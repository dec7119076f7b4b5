//! Periodic tick source bookkeeping
//!
//! The tick source runs from the highest-priority context and must never
//! stall it. It waits at most [`TICK_LOCK_TIMEOUT_MS`] for the state lock;
//! if the lock is still busy the tick is skipped rather than queued, so the
//! stopwatch can fall behind wall-clock time under sustained contention.
//! That trade-off is intentional and must stay.
//!
//! This module only keeps the statistics; the lock attempt itself is
//! [`SharedStopwatch::tick`](crate::state::SharedStopwatch::tick) under a
//! timeout.
//!
//! [`TICK_LOCK_TIMEOUT_MS`]: crate::config::TICK_LOCK_TIMEOUT_MS

use crate::state::TickOutcome;

/// Counters kept by the tick task
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickStats {
    /// Periods that advanced the counter
    advanced: u32,
    /// Periods lost to lock contention
    skipped: u32,
    /// Consecutive skips ending at the latest period
    skip_streak: u32,
}

impl TickStats {
    pub const fn new() -> Self {
        Self {
            advanced: 0,
            skipped: 0,
            skip_streak: 0,
        }
    }

    /// Record the outcome of one period
    pub fn record(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Advanced(_) => {
                self.advanced = self.advanced.wrapping_add(1);
                self.skip_streak = 0;
            }
            TickOutcome::Stopped => {
                self.skip_streak = 0;
            }
            TickOutcome::Skipped => {
                self.skipped = self.skipped.saturating_add(1);
                self.skip_streak = self.skip_streak.saturating_add(1);
            }
        }
    }

    pub fn advanced(&self) -> u32 {
        self.advanced
    }

    /// Total ticks lost since boot; the stopwatch lags by this many tenths
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    pub fn skip_streak(&self) -> u32 {
        self.skip_streak
    }
}
