//! Glyph block geometry and counter rendering
//!
//! The counter is drawn one digit at a time from a fixed-width font, so the
//! block size only depends on the digit count and text scale.

use core::fmt::{self, Write};

use heapless::String;

use crate::color::Rgb565;
use crate::config::MAX_DIGITS;
use crate::traits::PixelSurface;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Font cell width at scale 1
pub const GLYPH_WIDTH: i32 = 5;

/// Font cell height at scale 1
pub const GLYPH_HEIGHT: i32 = 8;

/// Gap between digits in pixels (not scaled)
pub const DIGIT_SPACING: i32 = 1;

/// Room for any `u32` padded to `MAX_DIGITS`
const TEXT_CAPACITY: usize = 20;

/// Pixel position of a block's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Digit count and text scale of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlyphLayout {
    /// Number of digits shown (value is zero-padded to this width)
    pub digits: u8,
    /// Integer text scale
    pub scale: u8,
}

impl Default for GlyphLayout {
    fn default() -> Self {
        Self { digits: 5, scale: 2 }
    }
}

impl GlyphLayout {
    pub const fn new(digits: u8, scale: u8) -> Self {
        Self { digits, scale }
    }

    /// Digits actually drawn, capped at `MAX_DIGITS`
    pub const fn shown_digits(&self) -> u8 {
        if self.digits > MAX_DIGITS {
            MAX_DIGITS
        } else {
            self.digits
        }
    }

    /// Width of one scaled digit
    pub const fn digit_width(&self) -> i32 {
        GLYPH_WIDTH * self.scale as i32
    }

    /// Width of the whole counter block
    pub const fn block_width(&self) -> i32 {
        let digits = self.shown_digits() as i32;
        if digits == 0 {
            return 0;
        }
        digits * self.digit_width() + (digits - 1) * DIGIT_SPACING
    }

    /// Height of the counter block
    pub const fn block_height(&self) -> i32 {
        GLYPH_HEIGHT * self.scale as i32
    }

    /// Origin that centers the block on a `width` x `height` panel
    pub const fn centered_in(&self, width: i32, height: i32) -> Point {
        Point::new(
            (width - self.block_width()) / 2,
            (height - self.block_height()) / 2,
        )
    }

    /// Largest origin that keeps the whole block on the panel
    ///
    /// Clamped to zero on an axis where the block is larger than the panel.
    pub fn max_origin(&self, width: i32, height: i32) -> Point {
        Point::new(
            (width - self.block_width()).max(0),
            (height - self.block_height()).max(0),
        )
    }

    /// Draw `value` with the block's top-left corner at `origin`
    ///
    /// The value is zero-padded to `digits` characters; only the first
    /// `digits` characters are drawn, so wider values are cut off. A digit
    /// count above `MAX_DIGITS` is treated as `MAX_DIGITS`.
    pub fn draw_counter<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        value: u32,
        origin: Point,
        color: Rgb565,
    ) {
        let digits = self.shown_digits();
        let text = match format_counter(value, digits) {
            Ok(text) => text,
            Err(_) => {
                warn!("Counter text does not fit for {} digits", digits);
                return;
            }
        };
        let step = self.digit_width() + DIGIT_SPACING;
        for (i, glyph) in text.chars().take(digits as usize).enumerate() {
            let x = origin.x + i as i32 * step;
            surface.draw_glyph(glyph, x, origin.y, self.scale, color);
        }
    }
}

/// Zero-padded decimal text of `value`
///
/// Fails if the padded text exceeds the buffer, which can only happen for
/// `digits` above `MAX_DIGITS`.
pub fn format_counter(value: u32, digits: u8) -> Result<String<TEXT_CAPACITY>, fmt::Error> {
    let mut text = String::new();
    write!(text, "{:0width$}", value, width = digits as usize)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingSurface;

    #[test]
    fn test_default_block_size() {
        let layout = GlyphLayout::default();
        // 5 digits * 10px + 4 gaps
        assert_eq!(layout.block_width(), 54);
        assert_eq!(layout.block_height(), 16);
    }

    #[test]
    fn test_centered_on_panel() {
        let layout = GlyphLayout::default();
        assert_eq!(layout.centered_in(64, 32), Point::new(5, 8));
    }

    #[test]
    fn test_max_origin_clamps() {
        let layout = GlyphLayout::default();
        assert_eq!(layout.max_origin(64, 32), Point::new(10, 16));
        assert_eq!(layout.max_origin(40, 10), Point::new(0, 0));
    }

    #[test]
    fn test_format_pads_and_keeps_wide_values() {
        assert_eq!(format_counter(42, 5).unwrap().as_str(), "00042");
        assert_eq!(format_counter(123_456, 5).unwrap().as_str(), "123456");
        assert_eq!(format_counter(u32::MAX, 10).unwrap().as_str(), "4294967295");
    }

    #[test]
    fn test_format_reports_overflow() {
        assert_eq!(format_counter(42, 20).unwrap().len(), 20);
        assert!(format_counter(42, 25).is_err());
    }

    #[test]
    fn test_draw_counter_positions() {
        let layout = GlyphLayout::default();
        let mut surface = RecordingSurface::new(64, 32);
        layout.draw_counter(&mut surface, 907, Point::new(3, 4), Rgb565::RED);

        let glyphs = surface.glyphs();
        assert_eq!(glyphs.len(), 5);
        let xs: std::vec::Vec<i32> = glyphs.iter().map(|g| g.x).collect();
        assert_eq!(xs, [3, 14, 25, 36, 47]);
        let text: std::string::String = glyphs.iter().map(|g| g.glyph).collect();
        assert_eq!(text, "00907");
        assert!(glyphs.iter().all(|g| g.y == 4 && g.scale == 2 && g.color == Rgb565::RED));
    }

    #[test]
    fn test_draw_counter_truncates_wide_value() {
        let layout = GlyphLayout::new(3, 1);
        let mut surface = RecordingSurface::new(64, 32);
        layout.draw_counter(&mut surface, 98_765, Point::new(0, 0), Rgb565::WHITE);
        let text: std::string::String = surface.glyphs().iter().map(|g| g.glyph).collect();
        assert_eq!(text, "987");
    }

    #[test]
    fn test_draw_counter_caps_digit_count() {
        let layout = GlyphLayout::new(25, 1);
        assert_eq!(layout.shown_digits(), MAX_DIGITS);
        assert_eq!(layout.block_width(), GlyphLayout::new(MAX_DIGITS, 1).block_width());

        let mut surface = RecordingSurface::new(64, 32);
        layout.draw_counter(&mut surface, 42, Point::new(0, 0), Rgb565::WHITE);
        let text: std::string::String = surface.glyphs().iter().map(|g| g.glyph).collect();
        assert_eq!(text, "0000000042");
    }
}
