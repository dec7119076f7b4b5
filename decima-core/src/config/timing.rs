//! Task periods and timing thresholds (all in milliseconds)

/// A raw button level must hold for longer than this before it is committed
pub const DEBOUNCE_MS: u32 = 50;

/// Input coordinator polling interval
pub const INPUT_POLL_MS: u32 = 20;

/// Tick source period; one tick is one tenth of a second
pub const TICK_PERIOD_MS: u32 = 100;

/// Longest the tick source will wait for the state lock before skipping
pub const TICK_LOCK_TIMEOUT_MS: u32 = 5;

/// Display refresh period, half the tick period so a new tenth shows promptly
pub const REFRESH_PERIOD_MS: u32 = TICK_PERIOD_MS / 2;

/// Full on+off period of the green LED while running
pub const BLINK_PERIOD_MS: u32 = 500;

/// LED task period while running
pub const LED_RUNNING_POLL_MS: u32 = 50;

/// LED task period while stopped (the outputs are static)
pub const LED_STOPPED_POLL_MS: u32 = 100;

const _: () = assert!(REFRESH_PERIOD_MS < TICK_PERIOD_MS);
const _: () = assert!(INPUT_POLL_MS < DEBOUNCE_MS);
const _: () = assert!(TICK_LOCK_TIMEOUT_MS < TICK_PERIOD_MS);
const _: () = assert!(LED_RUNNING_POLL_MS <= BLINK_PERIOD_MS / 2);
