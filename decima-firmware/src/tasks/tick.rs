//! Tick task
//!
//! Advances the stopwatch by one tenth every period. Runs on the
//! highest-priority executor, so it only waits a few milliseconds for the
//! state lock and skips the period if the lock is still busy.

use defmt::*;
use embassy_time::{with_timeout, Duration, Ticker};

use decima_core::config::{TICK_LOCK_TIMEOUT_MS, TICK_PERIOD_MS};
use decima_core::state::TickOutcome;
use decima_core::tick::TickStats;

use crate::resources::STOPWATCH;

/// Tick task - one tenth of a second per period while running
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS as u64));
    let lock_timeout = Duration::from_millis(TICK_LOCK_TIMEOUT_MS as u64);
    let mut stats = TickStats::new();

    loop {
        ticker.next().await;

        // A timed-out lock attempt drops the whole tick; it is never replayed
        let outcome = with_timeout(lock_timeout, STOPWATCH.tick())
            .await
            .unwrap_or(TickOutcome::Skipped);
        stats.record(outcome);

        match outcome {
            TickOutcome::Advanced(tenths) => trace!("Tick: {} tenths", tenths),
            TickOutcome::Stopped => {}
            TickOutcome::Skipped => warn!(
                "Tick skipped: state lock busy ({} lost, {} in a row)",
                stats.skipped(),
                stats.skip_streak()
            ),
        }
    }
}
