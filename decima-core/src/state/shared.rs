//! Lock-guarded stopwatch state
//!
//! Wraps [`StopwatchState`] in an embassy async mutex and exposes each
//! task's access as one short critical section. The guard never escapes
//! these methods, so no caller can hold the state lock across hardware I/O
//! or while taking another lock.
//!
//! The raw mutex type is a parameter: firmware shares the state across
//! executors of different priority and uses `CriticalSectionRawMutex`,
//! host tests use `NoopRawMutex`.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use super::events::{ResetOutcome, TickOutcome};
use super::machine::{Snapshot, StopwatchState};

/// Stopwatch state behind the state lock
pub struct SharedStopwatch<M: RawMutex> {
    state: Mutex<M, StopwatchState>,
}

impl<M: RawMutex> Default for SharedStopwatch<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> SharedStopwatch<M> {
    /// Create the power-on state (usable in a `static`)
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(StopwatchState::new()),
        }
    }

    /// Flip the run flag; returns the new value
    pub async fn toggle_running(&self) -> bool {
        self.state.lock().await.toggle_running()
    }

    /// Reset press: honoured only while stopped
    pub async fn request_reset(&self) -> ResetOutcome {
        self.state.lock().await.request_reset()
    }

    /// One tick period, waiting as long as it takes for the lock
    ///
    /// The increment happens in the same poll that acquires the lock, so
    /// wrapping this future in a timeout can only drop the whole tick, never
    /// half of it.
    pub async fn tick(&self) -> TickOutcome {
        self.state.lock().await.tick()
    }

    /// Short read of the run flag
    pub async fn is_running(&self) -> bool {
        self.state.lock().await.is_running()
    }

    /// Read the counter for display, consuming any pending reset
    pub async fn take_snapshot(&self) -> Snapshot {
        self.state.lock().await.take_snapshot()
    }

    /// Copy of the whole state, for diagnostics
    pub async fn peek(&self) -> StopwatchState {
        *self.state.lock().await
    }
}
