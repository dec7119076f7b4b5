//! Seven-segment digit panels
//!
//! A panel is a row of equally sized digit cells at a fixed position. Every
//! draw repaints all seven segments of a cell, lit ones in the "on" color
//! and the rest in the "off" color, so no background clear is needed
//! between digits.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::segments::{self, SegmentGeometry, SEGMENT_COUNT};

/// Panel color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelColors {
    /// Lit segment
    pub on: Rgb565,
    /// Unlit segment (dim ghost of the glyph)
    pub off: Rgb565,
    /// Space around and between segments
    pub background: Rgb565,
}

/// Panel errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Panel created with no digit cells
    NoDigits,
    /// Cell too small for a seven-segment glyph
    TooSmall,
    /// Panel does not fit on the draw target
    OutOfBounds,
    /// Column past the last cell
    InvalidColumn(u8),
    /// Value is not a decimal digit
    InvalidDigit(u8),
}

/// Failure while drawing on a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError<E> {
    Panel(PanelError),
    Target(E),
}

impl<E> From<PanelError> for DrawError<E> {
    fn from(e: PanelError) -> Self {
        DrawError::Panel(e)
    }
}

/// A row of digit cells
#[derive(Debug, Clone, Copy)]
pub struct DigitPanel {
    origin: Point,
    digit_count: u8,
    cell: Size,
    colors: PanelColors,
    geometry: SegmentGeometry,
}

impl DigitPanel {
    /// Create a panel
    ///
    /// # Arguments
    /// - `origin`: Top-left corner of the first cell
    /// - `digit_count`: Number of cells, left to right
    /// - `height`, `width`: Size of one cell in pixels
    /// - `colors`: Color scheme
    pub fn new(
        origin: Point,
        digit_count: u8,
        height: u32,
        width: u32,
        colors: PanelColors,
    ) -> Result<Self, PanelError> {
        if digit_count == 0 {
            return Err(PanelError::NoDigits);
        }
        let geometry = SegmentGeometry::new(width, height).ok_or(PanelError::TooSmall)?;

        Ok(Self {
            origin,
            digit_count,
            cell: Size::new(width, height),
            colors,
            geometry,
        })
    }

    /// Area covered by the whole panel
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.origin,
            Size::new(self.cell.width * self.digit_count as u32, self.cell.height),
        )
    }

    /// Area covered by one cell
    pub fn cell(&self, column: u8) -> Result<Rectangle, PanelError> {
        if column >= self.digit_count {
            return Err(PanelError::InvalidColumn(column));
        }
        let x = self.origin.x + (self.cell.width * column as u32) as i32;
        Ok(Rectangle::new(Point::new(x, self.origin.y), self.cell))
    }

    /// Paint the panel background
    pub fn clear<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.fill_solid(&self.bounds(), self.colors.background)
    }

    /// Paint every cell with all segments unlit
    pub fn draw_blank<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.clear(target)?;
        for column in 0..self.digit_count {
            let origin = self.origin + Point::new((self.cell.width * column as u32) as i32, 0);
            for i in 0..SEGMENT_COUNT {
                target.fill_solid(&self.geometry.segment(i, origin), self.colors.off)?;
            }
        }
        Ok(())
    }

    /// Draw `value` into cell `column`
    pub fn draw_digit<D>(
        &self,
        target: &mut D,
        column: u8,
        value: u8,
    ) -> Result<(), DrawError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let cell = self.cell(column)?;
        let mask = segments::glyph(value).ok_or(PanelError::InvalidDigit(value))?;

        for i in 0..SEGMENT_COUNT {
            let color = if segments::is_lit(mask, i) {
                self.colors.on
            } else {
                self.colors.off
            };
            target
                .fill_solid(&self.geometry.segment(i, cell.top_left), color)
                .map_err(DrawError::Target)?;
        }

        Ok(())
    }
}
