//! Status LED state machine
//!
//! - Stopped: red on, green off.
//! - Running: red off, green blinking with a 50% duty cycle.
//!
//! Any change of run state restarts the blink from "green off" so a restart
//! always begins in the same phase. Outputs are recomputed every cycle and
//! are safe to re-assert.

use decima_hal::OutputPin;

/// Indicator mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPhase {
    Stopped,
    Running,
}

/// Desired LED levels for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedOutputs {
    pub red: bool,
    pub green: bool,
}

impl LedOutputs {
    pub const STOPPED: Self = Self {
        red: true,
        green: false,
    };
}

/// Blink timing state, private to the LED task
#[derive(Debug, Clone)]
pub struct LedIndicator {
    phase: LedPhase,
    half_period_ms: u32,
    green_lit: bool,
    last_toggle_ms: u32,
}

impl LedIndicator {
    /// Start stopped, with `blink_period_ms` as the full on+off period
    pub fn new(blink_period_ms: u32) -> Self {
        Self {
            phase: LedPhase::Stopped,
            half_period_ms: blink_period_ms / 2,
            green_lit: false,
            last_toggle_ms: 0,
        }
    }

    /// Advance the state machine
    ///
    /// # Arguments
    /// - `running`: Run flag read from shared state
    /// - `now_ms`: Monotonic time in milliseconds (wrapping is fine)
    pub fn update(&mut self, running: bool, now_ms: u32) -> LedOutputs {
        let phase = if running {
            LedPhase::Running
        } else {
            LedPhase::Stopped
        };

        if phase != self.phase {
            self.phase = phase;
            self.green_lit = false;
            self.last_toggle_ms = now_ms;
        }

        match self.phase {
            LedPhase::Stopped => LedOutputs::STOPPED,
            LedPhase::Running => {
                if now_ms.wrapping_sub(self.last_toggle_ms) >= self.half_period_ms {
                    self.green_lit = !self.green_lit;
                    self.last_toggle_ms = now_ms;
                }
                LedOutputs {
                    red: false,
                    green: self.green_lit,
                }
            }
        }
    }

    pub fn phase(&self) -> LedPhase {
        self.phase
    }
}

/// The two status LEDs, guarded together by the LED lock
pub struct StatusLeds<R, G> {
    red: R,
    green: G,
}

impl<R: OutputPin, G: OutputPin> StatusLeds<R, G> {
    pub fn new(red: R, green: G) -> Self {
        Self { red, green }
    }

    /// Drive both pins
    pub fn apply(&mut self, outputs: LedOutputs) {
        self.red.set_state(outputs.red);
        self.green.set_state(outputs.green);
    }
}
