//! Screen layout for a 320x240 landscape panel
//!
//! ```text
//!  +--------------------------------------+
//!  |    [m][m]  :  [s][s]                 |
//!  |                 [d]                  |
//!  +--------------------------------------+
//! ```
//!
//! Minutes and seconds share the top row with the colon between them; the
//! tenths digit sits under the seconds.

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::panel::PanelColors;

/// Horizontal shift applied to everything on screen
const OFFSET_X: i32 = 10;

pub const DIGIT_WIDTH: u32 = 60;
pub const DIGIT_HEIGHT: u32 = 100;

pub const SEPARATOR_RADIUS: u32 = 5;

/// Red segments on a dark red ghost, black background
pub const COLORS: PanelColors = PanelColors {
    on: Rgb565::RED,
    off: Rgb565::new(0x03, 0x00, 0x00),
    background: Rgb565::BLACK,
};

/// Where everything goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    pub minutes: Point,
    pub seconds: Point,
    pub tenths: Point,
    /// Size of one digit cell
    pub digit: Size,
    /// Centres of the two colon dots
    pub separators: [Point; 2],
    pub separator_radius: u32,
    pub colors: PanelColors,
}

/// The stock stopwatch layout
pub const LAYOUT: FaceLayout = FaceLayout {
    minutes: Point::new(30 + OFFSET_X, 10),
    seconds: Point::new(170 + OFFSET_X, 10),
    tenths: Point::new(170 + OFFSET_X, 110),
    digit: Size::new(DIGIT_WIDTH, DIGIT_HEIGHT),
    separators: [Point::new(160 + OFFSET_X, 45), Point::new(160 + OFFSET_X, 85)],
    separator_radius: SEPARATOR_RADIUS,
    colors: COLORS,
};

/// Raw 16-bit value of a color, as sent to the panel
pub fn raw(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}
