//! Button polling task

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use decima_core::config::INPUT_POLL_MS;
use decima_core::debounce::Edge;
use decima_core::input::InputCoordinator;
use decima_core::state::ResetOutcome;
use decima_hal_rp2040::RpInput;

use crate::resources::STOPWATCH;

/// Input task - debounces both buttons and applies confirmed presses
#[embassy_executor::task]
pub async fn input_task(mut buttons: InputCoordinator<RpInput, RpInput>) {
    info!("Input task started");

    let mut ticker = Ticker::every(Duration::from_millis(INPUT_POLL_MS as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;
        let report = buttons.poll(now_ms, &STOPWATCH).await;
        if report.is_empty() {
            continue;
        }

        if let Some(running) = report.running {
            info!("Start/stop pressed: {}", if running { "running" } else { "stopped" });
        }

        match report.reset_outcome {
            Some(ResetOutcome::Requested) => info!("Reset requested"),
            Some(ResetOutcome::IgnoredWhileRunning) => debug!("Reset ignored while running"),
            None => {}
        }

        if report.start_stop == Some(Edge::Released) || report.reset == Some(Edge::Released) {
            debug!("Button released");
        }
    }
}
