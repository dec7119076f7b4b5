//! Input coordinator
//!
//! Polls both buttons through their own debounce filters and turns confirmed
//! press edges into state mutations. Release edges change nothing.
//!
//! Lock acquisition here waits indefinitely; each critical section is a
//! single field update, so the wait is bounded in practice.

use embassy_sync::blocking_mutex::raw::RawMutex;

use decima_hal::InputPin;

use crate::debounce::{DebounceFilter, Edge, Polarity};
use crate::state::{ResetOutcome, SharedStopwatch};

/// What one poll observed and did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputReport {
    pub start_stop: Option<Edge>,
    pub reset: Option<Edge>,
    /// New run flag, if start/stop was pressed
    pub running: Option<bool>,
    /// Gating decision, if reset was pressed
    pub reset_outcome: Option<ResetOutcome>,
}

impl InputReport {
    /// Check if nothing happened this poll
    pub fn is_empty(&self) -> bool {
        self.start_stop.is_none() && self.reset.is_none()
    }
}

/// Owner of both buttons and their filters
pub struct InputCoordinator<S, R> {
    start_stop: S,
    reset: R,
    start_stop_filter: DebounceFilter,
    reset_filter: DebounceFilter,
}

impl<S: InputPin, R: InputPin> InputCoordinator<S, R> {
    /// Create a coordinator with both filters released
    pub fn new(start_stop: S, reset: R, polarity: Polarity, debounce_ms: u32) -> Self {
        Self {
            start_stop,
            reset,
            start_stop_filter: DebounceFilter::new(polarity, debounce_ms),
            reset_filter: DebounceFilter::new(polarity, debounce_ms),
        }
    }

    /// Sample both pins once, without touching shared state
    pub fn sample(&mut self, now_ms: u32) -> (Option<Edge>, Option<Edge>) {
        let start_stop = self
            .start_stop_filter
            .observe(self.start_stop.is_high(), now_ms);
        let reset = self.reset_filter.observe(self.reset.is_high(), now_ms);
        (start_stop, reset)
    }

    /// One polling cycle
    ///
    /// Start/stop is handled before reset, so pressing both in the same
    /// cycle while running stops the watch and then requests the reset.
    pub async fn poll<M: RawMutex>(
        &mut self,
        now_ms: u32,
        state: &SharedStopwatch<M>,
    ) -> InputReport {
        let (start_stop, reset) = self.sample(now_ms);
        let mut report = InputReport {
            start_stop,
            reset,
            ..Default::default()
        };

        if start_stop == Some(Edge::Pressed) {
            report.running = Some(state.toggle_running().await);
        }

        if reset == Some(Edge::Pressed) {
            report.reset_outcome = Some(state.request_reset().await);
        }

        report
    }
}
