//! GPIO allocation and pin wrappers
//!
//! Tracks which GPIO pins are in use to prevent conflicting assignments,
//! and wraps embassy-rp pins so the core logic can use the `decima-hal`
//! traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output};
use embassy_rp::Peri;
use heapless::FnvIndexSet;

use decima_hal::{PinConfig, PinMode, Pull};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when configuring a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken by another function
    AlreadyTaken,
    /// Config asks for the wrong direction for this constructor
    WrongMode,
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    ///
    /// Returns `Ok(())` if the pin was successfully allocated.
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin >= GPIO_COUNT as u8 {
            return Err(PinError::InvalidPin);
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken);
        }
        self.allocated
            .insert(pin)
            .map_err(|_| PinError::AlreadyTaken)?;
        Ok(())
    }

    /// Get the number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }

    /// Configure a polled input
    ///
    /// `pin` must be the peripheral matching `config.pin`.
    pub fn input(
        &mut self,
        pin: Peri<'static, AnyPin>,
        config: PinConfig,
    ) -> Result<RpInput, PinError> {
        if config.mode != PinMode::Input {
            return Err(PinError::WrongMode);
        }
        self.allocate(config.pin)?;
        Ok(RpInput(Input::new(pin, to_rp_pull(config.pull))))
    }

    /// Configure a push-pull output, initially low
    pub fn output(
        &mut self,
        pin: Peri<'static, AnyPin>,
        config: PinConfig,
    ) -> Result<RpOutput, PinError> {
        if config.mode != PinMode::Output {
            return Err(PinError::WrongMode);
        }
        self.allocate(config.pin)?;
        Ok(RpOutput(Output::new(pin, Level::Low)))
    }
}

fn to_rp_pull(pull: Pull) -> embassy_rp::gpio::Pull {
    match pull {
        Pull::None => embassy_rp::gpio::Pull::None,
        Pull::Up => embassy_rp::gpio::Pull::Up,
        Pull::Down => embassy_rp::gpio::Pull::Down,
    }
}

/// Polled input pin
pub struct RpInput(Input<'static>);

impl decima_hal::InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Push-pull output pin
pub struct RpOutput(Output<'static>);

impl decima_hal::OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

// Lets display drivers written against embedded-hal drive allocated pins
impl embedded_hal::digital::ErrorType for RpOutput {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for RpOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_high();
        Ok(())
    }
}
