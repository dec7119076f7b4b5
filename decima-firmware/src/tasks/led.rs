//! Status LED task
//!
//! Red while stopped, blinking green while running. Polls faster while
//! running so the blink stays close to its nominal half period.

use defmt::*;
use embassy_time::{Instant, Timer};

use decima_core::config::{BLINK_PERIOD_MS, LED_RUNNING_POLL_MS, LED_STOPPED_POLL_MS};
use decima_core::led::LedIndicator;

use crate::resources::{LedLock, STOPWATCH};

/// LED task - mirrors the run state on the status LEDs
#[embassy_executor::task]
pub async fn led_task(leds: &'static LedLock) {
    info!("LED task started");

    let mut indicator = LedIndicator::new(BLINK_PERIOD_MS);
    let start = Instant::now();

    loop {
        // Short read, released before touching the LEDs
        let running = STOPWATCH.is_running().await;

        let previous = indicator.phase();
        let outputs = indicator.update(running, start.elapsed().as_millis() as u32);
        if indicator.phase() != previous {
            debug!("LED phase: {}", indicator.phase());
        }

        leds.lock().await.apply(outputs);

        let period = if running {
            LED_RUNNING_POLL_MS
        } else {
            LED_STOPPED_POLL_MS
        };
        Timer::after_millis(period as u64).await;
    }
}
