//! Display refresh engine
//!
//! Each refresh cycle has two separate critical sections connected only by
//! a [`Frame`] value:
//!
//! 1. [`RefreshEngine::snapshot`] takes the state lock, reads the counter
//!    and consumes any pending reset.
//! 2. [`RefreshEngine::render`] runs while the caller holds the display
//!    lock and draws only the cells whose value changed since the last pass.
//!
//! The state lock is released before the display lock is taken, so the two
//! locks are never nested.
//!
//! A forced full redraw (every cell plus the separators) happens on the
//! first pass after startup, on the pass following a reset and after any
//! failed draw.

use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

use super::cache::DigitCache;
use super::digits::{DigitSlot, Digits};
use crate::state::SharedStopwatch;
use crate::traits::{DigitDisplay, DisplayError};

/// Local copy of the state for one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub elapsed_tenths: u32,
    pub digits: Digits,
    /// This frame follows a reset and must be drawn in full
    pub reset_applied: bool,
}

impl Frame {
    pub fn new(elapsed_tenths: u32, reset_applied: bool) -> Self {
        Self {
            elapsed_tenths,
            digits: Digits::from_tenths(elapsed_tenths),
            reset_applied,
        }
    }
}

/// Draw calls issued by one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderReport {
    /// Cells drawn, in panel order
    pub drawn: Vec<DigitSlot, { DigitSlot::COUNT }>,
    pub separators: bool,
    pub full_redraw: bool,
}

impl RenderReport {
    /// Check if the pass touched the display bus at all
    pub fn is_idle(&self) -> bool {
        self.drawn.is_empty() && !self.separators
    }
}

/// Incremental renderer and its private digit cache
#[derive(Debug, Clone)]
pub struct RefreshEngine {
    cache: DigitCache,
    full_redraw_pending: bool,
}

impl Default for RefreshEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshEngine {
    /// Empty cache with a full redraw pending
    pub const fn new() -> Self {
        Self {
            cache: DigitCache::new(),
            full_redraw_pending: true,
        }
    }

    /// Read the state for one pass, applying a pending reset
    pub async fn snapshot<M: RawMutex>(state: &SharedStopwatch<M>) -> Frame {
        let snapshot = state.take_snapshot().await;
        Frame::new(snapshot.elapsed_tenths, snapshot.reset_applied)
    }

    /// Draw `frame`, touching only cells that changed
    ///
    /// Must be called with the display lock held. A draw error forgets the
    /// failing cell and schedules a full redraw for the next pass, since the
    /// panel may hold a partly painted glyph.
    pub fn render<D: DigitDisplay>(
        &mut self,
        frame: &Frame,
        display: &mut D,
    ) -> Result<RenderReport, DisplayError> {
        if frame.reset_applied {
            self.full_redraw_pending = true;
        }

        let mut report = RenderReport {
            full_redraw: self.full_redraw_pending,
            ..Default::default()
        };

        for (slot, value) in frame.digits.iter() {
            if !report.full_redraw && !self.cache.is_stale(slot, value) {
                continue;
            }

            if let Err(e) = display.draw_digit(slot, value) {
                self.cache.invalidate(slot);
                self.full_redraw_pending = true;
                return Err(e);
            }
            self.cache.set(slot, value);
            // At most COUNT slots are visited
            let _ = report.drawn.push(slot);
        }

        if report.full_redraw {
            // Still pending if this fails
            display.draw_separators()?;
            report.separators = true;
            self.full_redraw_pending = false;
        }

        Ok(report)
    }

    pub fn is_full_redraw_pending(&self) -> bool {
        self.full_redraw_pending
    }

    pub fn cache(&self) -> &DigitCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Digit(DigitSlot, u8),
        Separators,
    }

    /// Records draw calls; optionally fails one call
    #[derive(Default)]
    struct RecordingDisplay {
        calls: Vec<Call, 64>,
        fail_at: Option<usize>,
        attempts: usize,
    }

    impl RecordingDisplay {
        fn take(&mut self) -> Vec<Call, 64> {
            core::mem::take(&mut self.calls)
        }

        fn check(&mut self) -> Result<(), DisplayError> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_at == Some(attempt) {
                Err(DisplayError::Bus)
            } else {
                Ok(())
            }
        }
    }

    impl DigitDisplay for RecordingDisplay {
        fn draw_digit(&mut self, slot: DigitSlot, value: u8) -> Result<(), DisplayError> {
            self.check()?;
            self.calls.push(Call::Digit(slot, value)).unwrap();
            Ok(())
        }

        fn draw_separators(&mut self) -> Result<(), DisplayError> {
            self.check()?;
            self.calls.push(Call::Separators).unwrap();
            Ok(())
        }
    }

    fn full_redraw_calls(digits: [u8; 5]) -> [Call; 6] {
        [
            Call::Digit(DigitSlot::MinutesTens, digits[0]),
            Call::Digit(DigitSlot::MinutesUnits, digits[1]),
            Call::Digit(DigitSlot::SecondsTens, digits[2]),
            Call::Digit(DigitSlot::SecondsUnits, digits[3]),
            Call::Digit(DigitSlot::Tenths, digits[4]),
            Call::Separators,
        ]
    }

    fn pass(
        engine: &mut RefreshEngine,
        state: &SharedStopwatch<NoopRawMutex>,
        display: &mut RecordingDisplay,
    ) -> RenderReport {
        let frame = block_on(RefreshEngine::snapshot(state));
        engine.render(&frame, display).unwrap()
    }

    #[test]
    fn test_first_pass_draws_everything() {
        let mut engine = RefreshEngine::new();
        let mut display = RecordingDisplay::default();

        let report = engine.render(&Frame::new(0, false), &mut display).unwrap();
        assert!(report.full_redraw);
        assert!(report.separators);
        assert_eq!(report.drawn.len(), DigitSlot::COUNT);
        assert_eq!(display.take()[..], full_redraw_calls([0, 0, 0, 0, 0]));
        assert!(!engine.is_full_redraw_pending());
    }

    #[test]
    fn test_unchanged_frame_issues_no_draws() {
        let mut engine = RefreshEngine::new();
        let mut display = RecordingDisplay::default();
        let frame = Frame::new(1_234, false);

        engine.render(&frame, &mut display).unwrap();
        display.take();

        let report = engine.render(&frame, &mut display).unwrap();
        assert!(report.is_idle());
        assert!(display.take().is_empty());
    }

    #[test]
    fn test_redraws_only_changed_cells() {
        let mut engine = RefreshEngine::new();
        let mut display = RecordingDisplay::default();

        engine.render(&Frame::new(599, false), &mut display).unwrap();
        display.take();

        // 00:59.9 -> 01:00.0
        let report = engine.render(&Frame::new(600, false), &mut display).unwrap();
        assert!(!report.full_redraw);
        assert!(!report.separators);
        assert_eq!(
            display.take()[..],
            [
                Call::Digit(DigitSlot::MinutesUnits, 1),
                Call::Digit(DigitSlot::SecondsTens, 0),
                Call::Digit(DigitSlot::SecondsUnits, 0),
                Call::Digit(DigitSlot::Tenths, 0),
            ]
        );
    }

    #[test]
    fn test_reset_forces_full_redraw_even_when_unchanged() {
        let mut engine = RefreshEngine::new();
        let mut display = RecordingDisplay::default();

        engine.render(&Frame::new(0, false), &mut display).unwrap();
        display.take();

        let report = engine.render(&Frame::new(0, true), &mut display).unwrap();
        assert!(report.full_redraw);
        assert_eq!(display.take()[..], full_redraw_calls([0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_failed_draw_is_retried() {
        let mut engine = RefreshEngine::new();
        let mut display = RecordingDisplay {
            fail_at: Some(2),
            ..Default::default()
        };

        let frame = Frame::new(25, false);
        assert_eq!(engine.render(&frame, &mut display), Err(DisplayError::Bus));
        assert!(engine.is_full_redraw_pending());
        assert_eq!(engine.cache().get(DigitSlot::SecondsTens), None);
        display.take();

        let report = engine.render(&frame, &mut display).unwrap();
        assert!(report.full_redraw);
        assert_eq!(display.take()[..], full_redraw_calls([0, 0, 0, 2, 5]));
    }

    #[test]
    fn test_failed_incremental_draw_schedules_full_redraw() {
        let mut engine = RefreshEngine::new();
        let mut display = RecordingDisplay::default();

        engine.render(&Frame::new(25, false), &mut display).unwrap();
        display.take();

        // Next attempt (the tenths cell) fails
        display.fail_at = Some(display.attempts);
        let frame = Frame::new(26, false);
        assert_eq!(engine.render(&frame, &mut display), Err(DisplayError::Bus));
        assert!(engine.is_full_redraw_pending());

        let report = engine.render(&frame, &mut display).unwrap();
        assert!(report.full_redraw);
        assert_eq!(display.take()[..], full_redraw_calls([0, 0, 0, 2, 6]));
    }

    #[test]
    fn test_stopwatch_cycle_end_to_end() {
        let state = SharedStopwatch::<NoopRawMutex>::new();
        let mut engine = RefreshEngine::new();
        let mut display = RecordingDisplay::default();

        block_on(async {
            state.toggle_running().await;
            for _ in 0..25 {
                state.tick().await;
            }
        });

        // Startup pass paints 00:02.5 in full
        pass(&mut engine, &state, &mut display);
        assert_eq!(display.take()[..], full_redraw_calls([0, 0, 0, 2, 5]));

        // One more tick changes only the tenths cell
        block_on(state.tick());
        pass(&mut engine, &state, &mut display);
        assert_eq!(display.take()[..], [Call::Digit(DigitSlot::Tenths, 6)]);

        // Nothing changed
        pass(&mut engine, &state, &mut display);
        assert!(display.take().is_empty());

        // Stop, reset, and the next pass repaints 00:00.0 in full
        block_on(async {
            state.toggle_running().await;
            state.request_reset().await;
        });
        let report = pass(&mut engine, &state, &mut display);
        assert!(report.full_redraw);
        assert_eq!(display.take()[..], full_redraw_calls([0, 0, 0, 0, 0]));
        for slot in DigitSlot::ALL {
            assert_eq!(engine.cache().get(slot), Some(0));
        }

        let after = block_on(state.peek());
        assert_eq!(after.elapsed_tenths(), 0);
        assert!(!after.reset_requested());

        pass(&mut engine, &state, &mut display);
        assert!(display.take().is_empty());
    }
}
