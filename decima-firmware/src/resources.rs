//! Shared resources and their locks
//!
//! Three independent locks, each guarding one resource:
//!
//! - `STOPWATCH`: elapsed time and run state, written by the input and tick
//!   tasks, read by the LED and display tasks
//! - display lock: the LCD and the refresh engine's digit cache
//! - LED lock: both status LEDs
//!
//! No task ever holds two of them at once. All use `CriticalSectionRawMutex`
//! because the tasks run on executors of different priority.

use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use decima_core::display::RefreshEngine;
use decima_core::led::StatusLeds;
use decima_core::state::SharedStopwatch;
use decima_display::Ili9341;
use decima_hal_rp2040::RpOutput;

/// The stopwatch state lock
pub static STOPWATCH: SharedStopwatch<CriticalSectionRawMutex> = SharedStopwatch::new();

/// ILI9341 on SPI1 with GPIO data/command and chip-select lines
pub type Lcd = Ili9341<Spi<'static, SPI1, Blocking>, RpOutput, RpOutput>;

/// Everything behind the display lock
pub struct Screen {
    pub lcd: Lcd,
    /// Last-drawn digits live with the panel they describe
    pub engine: RefreshEngine,
}

pub type DisplayLock = Mutex<CriticalSectionRawMutex, Screen>;

pub type Leds = StatusLeds<RpOutput, RpOutput>;

pub type LedLock = Mutex<CriticalSectionRawMutex, Leds>;
