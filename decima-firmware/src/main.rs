//! Decima - Stopwatch Firmware
//!
//! Main firmware binary for an RP2040 stopwatch with two buttons, a red and
//! a green status LED, and an ILI9341 panel showing `mm:ss.d`.
//!
//! Tasks run on three executors so the tick cannot be starved:
//!
//! | Executor              | Priority | Tasks           |
//! |-----------------------|----------|-----------------|
//! | SWI_IRQ_1 (interrupt) | high     | tick            |
//! | SWI_IRQ_0 (interrupt) | medium   | input, display  |
//! | thread mode           | low      | LEDs            |
//!
//! Named after the Latin *decima*, "tenth".

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor, SpawnError};
use embassy_rp::gpio::AnyPin;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::spi::{self, Spi};
use embassy_rp::Peri;
use embassy_sync::mutex::Mutex;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use decima_core::config::{BUTTONS, BUTTON_POLARITY, DEBOUNCE_MS, LCD, LEDS};
use decima_core::display::RefreshEngine;
use decima_core::input::InputCoordinator;
use decima_core::led::StatusLeds;
use decima_display::Ili9341;
use decima_hal_rp2040::{GpioAllocator, PinError};

use crate::resources::{DisplayLock, LedLock, Screen};

mod resources;
mod tasks;

// Peripherals below are picked by name; keep them in step with the config
const _: () = {
    assert!(BUTTONS.start_stop.pin == 14);
    assert!(BUTTONS.reset.pin == 13);
    assert!(LEDS.red.pin == 27);
    assert!(LEDS.green.pin == 26);
    assert!(LCD.sck == 10);
    assert!(LCD.mosi == 11);
    assert!(LCD.cs.pin == 9);
    assert!(LCD.dc.pin == 8);
    assert!(LCD.reset.pin == 15);
};

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MED: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

// Locks for the hardware resources (must live forever for task references)
static DISPLAY: StaticCell<DisplayLock> = StaticCell::new();
static LEDS_LOCK: StaticCell<LedLock> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_MED.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Decima firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Pins
    let mut gpio = GpioAllocator::new();

    let start_stop = claim(
        gpio.input(Peri::<AnyPin>::from(p.PIN_14), BUTTONS.start_stop),
        "start/stop button",
    );
    let reset = claim(
        gpio.input(Peri::<AnyPin>::from(p.PIN_13), BUTTONS.reset),
        "reset button",
    );
    let red = claim(gpio.output(Peri::<AnyPin>::from(p.PIN_27), LEDS.red), "red LED");
    let green = claim(
        gpio.output(Peri::<AnyPin>::from(p.PIN_26), LEDS.green),
        "green LED",
    );

    claim(gpio.allocate(LCD.sck), "LCD SCK");
    claim(gpio.allocate(LCD.mosi), "LCD MOSI");
    let cs = claim(gpio.output(Peri::<AnyPin>::from(p.PIN_9), LCD.cs), "LCD CS");
    let dc = claim(gpio.output(Peri::<AnyPin>::from(p.PIN_8), LCD.dc), "LCD DC");
    let mut lcd_reset = claim(
        gpio.output(Peri::<AnyPin>::from(p.PIN_15), LCD.reset),
        "LCD reset",
    );
    info!("{} GPIO pins configured", gpio.allocated_count());

    // Display hardware
    let mut spi_config = spi::Config::default();
    spi_config.frequency = LCD.frequency;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    let mut lcd = Ili9341::new(spi, dc, cs);
    if let Err(e) = lcd.init(&mut lcd_reset, &mut Delay) {
        error!("LCD init failed: {}", e);
        panic!("display hardware init failed");
    }
    info!("LCD initialized");

    // Locks
    let display = DISPLAY.init(Mutex::new(Screen {
        lcd,
        engine: RefreshEngine::new(),
    }));
    let leds = LEDS_LOCK.init(Mutex::new(StatusLeds::new(red, green)));
    let buttons = InputCoordinator::new(start_stop, reset, BUTTON_POLARITY, DEBOUNCE_MS);

    // Tasks
    interrupt::SWI_IRQ_0.set_priority(Priority::P3);
    let medium = EXECUTOR_MED.start(interrupt::SWI_IRQ_0);
    spawned(medium.spawn(tasks::input_task(buttons)), "input");
    spawned(medium.spawn(tasks::display_task(display)), "display");

    // Tick source last, once everything it feeds exists
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawned(high.spawn(tasks::tick_task()), "tick");

    info!("All tasks spawned, firmware running");

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawned(spawner.spawn(tasks::led_task(leds)), "LED");
    })
}

/// Unwrap a pin assignment, halting on conflicts
fn claim<T>(result: Result<T, PinError>, what: &str) -> T {
    match result {
        Ok(pin) => pin,
        Err(e) => {
            error!("Cannot configure {}: {}", what, e);
            panic!("pin configuration failed");
        }
    }
}

/// Halt if a task could not be spawned
fn spawned(result: Result<(), SpawnError>, name: &str) {
    if let Err(e) = result {
        error!("Failed to spawn {} task: {}", name, e);
        panic!("task spawn failed");
    }
}
