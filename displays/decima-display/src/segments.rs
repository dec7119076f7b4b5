//! Seven-segment glyphs and cell geometry
//!
//! ```text
//!    aaa
//!   f   b
//!   f   b
//!    ggg
//!   e   c
//!   e   c
//!    ddd
//! ```

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Number of segments in a cell
pub const SEGMENT_COUNT: usize = 7;

/// Lit segments per decimal digit, bit 0 = `a` .. bit 6 = `g`
const GLYPHS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Segment mask for a decimal digit
pub fn glyph(value: u8) -> Option<u8> {
    GLYPHS.get(value as usize).copied()
}

/// Check if segment `index` is lit in `mask`
pub fn is_lit(mask: u8, index: usize) -> bool {
    mask & (1 << index) != 0
}

/// Segment rectangles for one cell, relative to the cell's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentGeometry {
    rects: [Rectangle; SEGMENT_COUNT],
}

impl SegmentGeometry {
    /// Lay out segments for a `width` x `height` cell
    ///
    /// Stroke thickness is a sixth of the width, with half a stroke of
    /// padding around the glyph so neighbouring cells do not touch. Returns
    /// `None` when the cell is too small to hold a legible glyph.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let t = (width / 6) as i32;
        let margin = t / 2;
        let inner_w = width as i32 - 2 * margin;
        let inner_h = height as i32 - 2 * margin;

        let mid_top = inner_h / 2 - t / 2;
        let mid_bottom = mid_top + t;
        let bar_w = inner_w - 2 * t;
        let upper_h = mid_top - t;
        let lower_h = inner_h - t - mid_bottom;

        if t < 1 || bar_w < 1 || upper_h < 1 || lower_h < 1 {
            return None;
        }

        let rect = |x: i32, y: i32, w: i32, h: i32| {
            Rectangle::new(
                Point::new(margin + x, margin + y),
                Size::new(w as u32, h as u32),
            )
        };

        Some(Self {
            rects: [
                rect(t, 0, bar_w, t),                   // a
                rect(inner_w - t, t, t, upper_h),       // b
                rect(inner_w - t, mid_bottom, t, lower_h), // c
                rect(t, inner_h - t, bar_w, t),         // d
                rect(0, mid_bottom, t, lower_h),        // e
                rect(0, t, t, upper_h),                 // f
                rect(t, mid_top, bar_w, t),             // g
            ],
        })
    }

    /// Segment `index` translated to a cell at `origin`
    pub fn segment(&self, index: usize, origin: Point) -> Rectangle {
        self.rects[index].translate(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_segment_counts() {
        let counts = [6, 2, 5, 5, 4, 5, 6, 3, 7, 6];
        for (digit, expected) in counts.iter().enumerate() {
            let mask = glyph(digit as u8).unwrap();
            assert_eq!(mask.count_ones(), *expected, "digit {}", digit);
        }
        assert_eq!(glyph(10), None);
    }

    #[test]
    fn test_segments_fit_cell_and_do_not_overlap() {
        let geometry = SegmentGeometry::new(60, 100).unwrap();
        let cell = Rectangle::new(Point::zero(), Size::new(60, 100));

        for i in 0..SEGMENT_COUNT {
            let a = geometry.segment(i, Point::zero());
            assert_eq!(cell.intersection(&a), a);
            for j in (i + 1)..SEGMENT_COUNT {
                let b = geometry.segment(j, Point::zero());
                assert!(a.intersection(&b).is_zero_sized(), "{} overlaps {}", i, j);
            }
        }
    }

    #[test]
    fn test_rejects_tiny_cells() {
        assert!(SegmentGeometry::new(5, 100).is_none());
        assert!(SegmentGeometry::new(60, 20).is_none());
        assert!(SegmentGeometry::new(12, 24).is_some());
    }
}
