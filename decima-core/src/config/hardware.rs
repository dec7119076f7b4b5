//! Board wiring
//!
//! Pin numbers are RP2040 GPIO numbers. Both buttons are wired to ground
//! and use the internal pull-up, so a pressed button reads low.

use decima_hal::PinConfig;

use crate::debounce::Polarity;

/// Button inputs
#[derive(Debug, Clone, Copy)]
pub struct ButtonPins {
    pub start_stop: PinConfig,
    pub reset: PinConfig,
}

/// Status LED outputs
#[derive(Debug, Clone, Copy)]
pub struct LedPins {
    pub red: PinConfig,
    pub green: PinConfig,
}

/// ILI9341 wiring on SPI1
#[derive(Debug, Clone, Copy)]
pub struct LcdPins {
    pub sck: u8,
    pub mosi: u8,
    pub cs: PinConfig,
    pub dc: PinConfig,
    pub reset: PinConfig,
    /// SPI clock in Hz
    pub frequency: u32,
}

pub const BUTTONS: ButtonPins = ButtonPins {
    start_stop: PinConfig::input_pull_up(14),
    reset: PinConfig::input_pull_up(13),
};

pub const BUTTON_POLARITY: Polarity = Polarity::ActiveLow;

pub const LEDS: LedPins = LedPins {
    red: PinConfig::output(27),
    green: PinConfig::output(26),
};

pub const LCD: LcdPins = LcdPins {
    sck: 10,
    mosi: 11,
    cs: PinConfig::output(9),
    dc: PinConfig::output(8),
    reset: PinConfig::output(15),
    frequency: 32_000_000,
};
