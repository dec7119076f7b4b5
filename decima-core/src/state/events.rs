//! Inputs to, and outcomes of, state mutations

/// Result of a confirmed reset press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetOutcome {
    /// Stopwatch was stopped; the display task will apply the reset
    Requested,
    /// Stopwatch was running; the press is dropped, not queued
    IgnoredWhileRunning,
}

/// Result of one tick source period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Counter advanced to the contained value
    Advanced(u32),
    /// Stopwatch is stopped; nothing to count
    Stopped,
    /// State lock was not available in time; this tick is lost
    Skipped,
}
