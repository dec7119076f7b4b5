//! Digit display abstraction
//!
//! The refresh engine only needs to paint one digit slot at a time and the
//! two fixed separators. Panels implement this for whatever pixel target
//! they drive.

use crate::display::DigitSlot;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin failure while writing
    Bus,
    /// Value outside 0..=9, or outside the slot's range
    InvalidDigit(u8),
    /// Slot does not exist on this panel
    InvalidSlot,
}

/// A five-slot `mm:ss.d` digit display
pub trait DigitDisplay {
    /// Paint `value` into `slot`, replacing whatever was there
    fn draw_digit(&mut self, slot: DigitSlot, value: u8) -> Result<(), DisplayError>;

    /// Paint the minute/second and second/tenth separators
    fn draw_separators(&mut self) -> Result<(), DisplayError>;
}

impl<T: DigitDisplay + ?Sized> DigitDisplay for &mut T {
    fn draw_digit(&mut self, slot: DigitSlot, value: u8) -> Result<(), DisplayError> {
        (**self).draw_digit(slot, value)
    }

    fn draw_separators(&mut self) -> Result<(), DisplayError> {
        (**self).draw_separators()
    }
}
