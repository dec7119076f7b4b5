//! Display refresh task
//!
//! Builds the stopwatch face, then each period snapshots the state and
//! redraws the digits that changed. The state lock and the display lock are
//! taken one after the other, never nested.

use defmt::*;
use embassy_time::{Duration, Ticker};
use embedded_graphics::geometry::OriginDimensions;

use decima_core::config::REFRESH_PERIOD_MS;
use decima_core::display::RefreshEngine;
use decima_display::{StopwatchFace, LAYOUT};

use crate::resources::{DisplayLock, Screen, STOPWATCH};

/// Display task - incremental `mm:ss.d` rendering
///
/// Returns early, leaving the rest of the firmware running, if the face
/// cannot be created.
#[embassy_executor::task]
pub async fn display_task(display: &'static DisplayLock) {
    info!("Display task started");

    let face = {
        let mut screen = display.lock().await;
        let face = match StopwatchFace::new(&LAYOUT, screen.lcd.size()) {
            Ok(face) => face,
            Err(e) => {
                error!("Failed to create digit panels: {}", e);
                return;
            }
        };
        if let Err(e) = face.prepare(&mut screen.lcd) {
            error!("Failed to paint stopwatch face: {}", e);
            return;
        }
        face
    };
    info!("Digit panels created");

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_PERIOD_MS as u64));

    loop {
        ticker.next().await;

        let frame = RefreshEngine::snapshot(&STOPWATCH).await;
        if frame.reset_applied {
            info!("Reset applied");
        }

        let result = {
            let mut guard = display.lock().await;
            let Screen { lcd, engine } = &mut *guard;
            engine.render(&frame, &mut face.on(lcd))
        };

        match result {
            Ok(report) if report.full_redraw => {
                debug!("Full redraw at {} tenths", frame.elapsed_tenths)
            }
            Ok(report) => trace!("Redrew {} digits", report.drawn.len()),
            Err(e) => warn!("Draw failed: {}; full redraw next cycle", e),
        }
    }
}
