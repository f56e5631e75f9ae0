//! Display surface trait for pixel matrix panels

use crate::color::Rgb565;

/// Drawing target for animations
///
/// Coordinates are signed so that a glyph block can hang off the panel edge;
/// implementations clip anything outside `0..width` / `0..height`.
/// Drawing never fails at this layer.
pub trait PixelSurface {
    /// Panel width in pixels
    fn width(&self) -> i32;

    /// Panel height in pixels
    fn height(&self) -> i32;

    /// Blank the whole surface
    fn clear(&mut self);

    /// Set a single pixel
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565);

    /// Draw one character cell with its top-left corner at `(x, y)`
    ///
    /// - `scale`: integer text size; each font pixel becomes a
    ///   `scale` x `scale` block
    fn draw_glyph(&mut self, glyph: char, x: i32, y: i32, scale: u8, color: Rgb565);
}

impl<T: PixelSurface + ?Sized> PixelSurface for &mut T {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        (**self).draw_pixel(x, y, color)
    }

    fn draw_glyph(&mut self, glyph: char, x: i32, y: i32, scale: u8, color: Rgb565) {
        (**self).draw_glyph(glyph, x, y, scale, color)
    }
}
