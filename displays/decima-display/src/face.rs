//! Stopwatch face: three panels and the colon
//!
//! Maps the five logical digit slots onto the minutes, seconds and tenths
//! panels. [`StopwatchFace::on`] pairs the face with a draw target for the
//! duration of one render pass; the pair implements [`DigitDisplay`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use decima_core::display::DigitSlot;
use decima_core::traits::{DigitDisplay, DisplayError};

use crate::layout::FaceLayout;
use crate::panel::{DigitPanel, DrawError, PanelColors, PanelError};

/// Positioned panels and separators
#[derive(Debug, Clone, Copy)]
pub struct StopwatchFace {
    minutes: DigitPanel,
    seconds: DigitPanel,
    tenths: DigitPanel,
    separators: [Point; 2],
    separator_radius: u32,
    colors: PanelColors,
}

impl StopwatchFace {
    /// Build the face for a screen of `screen` pixels
    ///
    /// Fails if any panel is malformed or does not fit on screen.
    pub fn new(layout: &FaceLayout, screen: Size) -> Result<Self, PanelError> {
        let panel = |origin: Point, digits: u8| {
            DigitPanel::new(
                origin,
                digits,
                layout.digit.height,
                layout.digit.width,
                layout.colors,
            )
        };

        let face = Self {
            minutes: panel(layout.minutes, 2)?,
            seconds: panel(layout.seconds, 2)?,
            tenths: panel(layout.tenths, 1)?,
            separators: layout.separators,
            separator_radius: layout.separator_radius,
            colors: layout.colors,
        };

        let screen = Rectangle::new(Point::zero(), screen);
        let fits = |area: Rectangle| screen.intersection(&area) == area;
        let panels_fit = [face.minutes, face.seconds, face.tenths]
            .iter()
            .all(|p| fits(p.bounds()));
        let dots_fit = face.separators.iter().all(|c| fits(face.dot(*c).bounding_box()));

        if panels_fit && dots_fit {
            Ok(face)
        } else {
            Err(PanelError::OutOfBounds)
        }
    }

    /// Paint the background and every cell unlit
    pub fn prepare<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(self.colors.background)?;
        self.minutes.draw_blank(target)?;
        self.seconds.draw_blank(target)?;
        self.tenths.draw_blank(target)
    }

    /// Panel and column showing `slot`
    pub fn locate(&self, slot: DigitSlot) -> (&DigitPanel, u8) {
        match slot {
            DigitSlot::MinutesTens => (&self.minutes, 0),
            DigitSlot::MinutesUnits => (&self.minutes, 1),
            DigitSlot::SecondsTens => (&self.seconds, 0),
            DigitSlot::SecondsUnits => (&self.seconds, 1),
            DigitSlot::Tenths => (&self.tenths, 0),
        }
    }

    fn dot(&self, center: Point) -> Circle {
        Circle::with_center(center, self.separator_radius * 2 + 1)
    }

    /// Bind the face to a target for drawing
    pub fn on<'a, D>(&'a self, target: &'a mut D) -> FaceTarget<'a, D>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        FaceTarget { face: self, target }
    }
}

/// A face bound to its draw target
pub struct FaceTarget<'a, D> {
    face: &'a StopwatchFace,
    target: &'a mut D,
}

impl<D> DigitDisplay for FaceTarget<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_digit(&mut self, slot: DigitSlot, value: u8) -> Result<(), DisplayError> {
        let (panel, column) = self.face.locate(slot);
        panel
            .draw_digit(self.target, column, value)
            .map_err(|e| match e {
                DrawError::Panel(PanelError::InvalidDigit(v)) => DisplayError::InvalidDigit(v),
                DrawError::Panel(_) => DisplayError::InvalidSlot,
                DrawError::Target(_) => DisplayError::Bus,
            })
    }

    fn draw_separators(&mut self) -> Result<(), DisplayError> {
        // Always lit
        let style = PrimitiveStyle::with_fill(self.face.colors.on);
        for center in self.face.separators {
            self.face
                .dot(center)
                .into_styled(style)
                .draw(self.target)
                .map_err(|_| DisplayError::Bus)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LAYOUT;

    const SCREEN: Size = Size::new(320, 240);

    /// Counts what reaches the target without storing pixels
    #[derive(Default)]
    struct CountingTarget {
        fills: u32,
        lit_fills: u32,
        pixels: u32,
        off_screen: u32,
        fail: bool,
    }

    impl OriginDimensions for CountingTarget {
        fn size(&self) -> Size {
            SCREEN
        }
    }

    impl DrawTarget for CountingTarget {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), ()>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            if self.fail {
                return Err(());
            }
            for Pixel(p, color) in pixels {
                assert_eq!(color, LAYOUT.colors.on);
                if !self.bounding_box().contains(p) {
                    self.off_screen += 1;
                }
                self.pixels += 1;
            }
            Ok(())
        }

        fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            if self.bounding_box().intersection(area) != *area {
                self.off_screen += 1;
            }
            self.fills += 1;
            if color == LAYOUT.colors.on {
                self.lit_fills += 1;
            }
            Ok(())
        }
    }

    #[test]
    fn test_stock_layout_fits() {
        assert!(StopwatchFace::new(&LAYOUT, SCREEN).is_ok());
    }

    #[test]
    fn test_off_screen_layout_rejected() {
        let mut layout = LAYOUT;
        layout.tenths = Point::new(300, 200);
        assert_eq!(
            StopwatchFace::new(&layout, SCREEN).unwrap_err(),
            PanelError::OutOfBounds
        );

        let mut layout = LAYOUT;
        layout.separators[0] = Point::new(2, 2);
        assert_eq!(
            StopwatchFace::new(&layout, SCREEN).unwrap_err(),
            PanelError::OutOfBounds
        );
    }

    #[test]
    fn test_slots_map_to_distinct_cells() {
        let face = StopwatchFace::new(&LAYOUT, SCREEN).unwrap();
        for (i, a) in DigitSlot::ALL.iter().enumerate() {
            let (pa, ca) = face.locate(*a);
            let cell_a = pa.cell(ca).unwrap();
            for b in &DigitSlot::ALL[i + 1..] {
                let (pb, cb) = face.locate(*b);
                let cell_b = pb.cell(cb).unwrap();
                assert!(cell_a.intersection(&cell_b).is_zero_sized());
            }
        }
    }

    #[test]
    fn test_draw_digit_paints_seven_segments() {
        let face = StopwatchFace::new(&LAYOUT, SCREEN).unwrap();
        let mut target = CountingTarget::default();

        face.on(&mut target).draw_digit(DigitSlot::Tenths, 7).unwrap();
        assert_eq!(target.fills, 7);
        assert_eq!(target.lit_fills, 3);
        assert_eq!(target.pixels, 0);
        assert_eq!(target.off_screen, 0);
    }

    #[test]
    fn test_separators_are_lit_dots() {
        let face = StopwatchFace::new(&LAYOUT, SCREEN).unwrap();
        let mut target = CountingTarget::default();

        face.on(&mut target).draw_separators().unwrap();
        assert!(target.fills + target.pixels > 0);
        assert_eq!(target.lit_fills, target.fills);
        assert_eq!(target.off_screen, 0);
    }

    #[test]
    fn test_errors_map_to_display_errors() {
        let face = StopwatchFace::new(&LAYOUT, SCREEN).unwrap();
        let mut target = CountingTarget::default();
        assert_eq!(
            face.on(&mut target).draw_digit(DigitSlot::MinutesTens, 12),
            Err(DisplayError::InvalidDigit(12))
        );

        target.fail = true;
        let mut display = face.on(&mut target);
        assert_eq!(
            display.draw_digit(DigitSlot::SecondsUnits, 3),
            Err(DisplayError::Bus)
        );
        assert_eq!(display.draw_separators(), Err(DisplayError::Bus));
    }

    #[test]
    fn test_prepare_clears_then_blanks_cells() {
        let face = StopwatchFace::new(&LAYOUT, SCREEN).unwrap();
        let mut target = CountingTarget::default();
        face.prepare(&mut target).unwrap();
        // Screen clear, then per panel: background plus seven segments per cell
        assert_eq!(target.fills, 1 + (1 + 14) * 2 + (1 + 7));
        assert_eq!(target.lit_fills, 0);
    }
}
