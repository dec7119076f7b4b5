//! Compile-time configuration
//!
//! Every tunable of the stopwatch is a constant: there is no config file,
//! no flash storage and no command-line surface.

pub mod hardware;
pub mod timing;

pub use hardware::{ButtonPins, LcdPins, LedPins, BUTTONS, BUTTON_POLARITY, LCD, LEDS};
pub use timing::*;
