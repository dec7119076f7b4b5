//! RP2040-specific HAL for the stopwatch firmware
//!
//! This crate provides RP2040 implementations of the shared `decima-hal`
//! traits, plus the GPIO allocator that guards pin configuration at
//! bring-up.

#![no_std]

pub mod gpio;

pub use decima_hal::{InputPin, OutputPin, PinConfig, PinMode, Pull};
pub use gpio::{GpioAllocator, PinError, RpInput, RpOutput};
