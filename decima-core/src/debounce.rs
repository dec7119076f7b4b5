//! Polled button debouncing
//!
//! Converts successive raw samples of a noisy digital input into confirmed
//! press/release edges. The filter is a pure function of the samples it is
//! fed: no interrupts, no allocation, and it can be dropped and recreated at
//! any time.
//!
//! A raw change only restarts the confirmation timer. The stable level is
//! committed once the raw level has held for longer than the threshold.

/// Which electrical level means "pressed"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed pulls the line low (pull-up wiring)
    ActiveLow,
    /// Pressed drives the line high (pull-down wiring)
    ActiveHigh,
}

impl Polarity {
    /// Check if a raw level reads as pressed
    pub fn is_pressed(self, high: bool) -> bool {
        match self {
            Polarity::ActiveLow => !high,
            Polarity::ActiveHigh => high,
        }
    }

    /// Raw level of a released button
    pub fn idle_level(self) -> bool {
        matches!(self, Polarity::ActiveLow)
    }
}

/// A confirmed transition of the stable level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// Filter phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Raw level agrees with the stable level
    Stable,
    /// Raw level differs and is waiting out the threshold
    AwaitingConfirmation,
}

/// Debounce filter for one button
#[derive(Debug, Clone)]
pub struct DebounceFilter {
    polarity: Polarity,
    threshold_ms: u32,
    /// Last raw sample seen
    raw_high: bool,
    /// Confirmed level
    stable_high: bool,
    /// Time of the last raw change (ms, wrapping)
    last_transition_ms: u32,
}

impl DebounceFilter {
    /// Create a filter that starts released
    pub fn new(polarity: Polarity, threshold_ms: u32) -> Self {
        let idle = polarity.idle_level();
        Self {
            polarity,
            threshold_ms,
            raw_high: idle,
            stable_high: idle,
            last_transition_ms: 0,
        }
    }

    /// Feed one raw sample
    ///
    /// # Arguments
    /// - `raw_high`: Raw pin level
    /// - `now_ms`: Monotonic time in milliseconds (wrapping is fine)
    ///
    /// Returns an edge when the stable level changes.
    pub fn observe(&mut self, raw_high: bool, now_ms: u32) -> Option<Edge> {
        if raw_high != self.raw_high {
            self.raw_high = raw_high;
            self.last_transition_ms = now_ms;
        }

        let held_ms = now_ms.wrapping_sub(self.last_transition_ms);
        if held_ms > self.threshold_ms && self.raw_high != self.stable_high {
            self.stable_high = self.raw_high;
            return Some(if self.polarity.is_pressed(self.stable_high) {
                Edge::Pressed
            } else {
                Edge::Released
            });
        }

        None
    }

    /// Current phase of the filter
    pub fn phase(&self) -> Phase {
        if self.raw_high == self.stable_high {
            Phase::Stable
        } else {
            Phase::AwaitingConfirmation
        }
    }

    /// Check if the confirmed level is pressed
    pub fn is_pressed(&self) -> bool {
        self.polarity.is_pressed(self.stable_high)
    }
}
