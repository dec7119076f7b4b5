//! Hardware-facing traits

pub mod display;

pub use display::{DigitDisplay, DisplayError};
