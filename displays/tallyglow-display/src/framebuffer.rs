//! RGB565 frame buffer
//!
//! Holds one full frame in memory. Animations draw into it through the core
//! `PixelSurface` trait; [`FrameBuffer::present`] streams it to a panel.

use tallyglow_core::color::Rgb565;
use tallyglow_core::config::{PANEL_HEIGHT, PANEL_WIDTH};
use tallyglow_core::traits::PixelSurface;

use crate::backend::{DisplayError, PanelBackend};
use crate::font::{self, FONT_HEIGHT, FONT_WIDTH};

/// Frame buffer sized for a 64x32 HUB75 panel
pub type Hub75Frame = FrameBuffer<{ PANEL_WIDTH as usize }, { PANEL_HEIGHT as usize }>;

/// Smallest rectangle containing every lit pixel (inclusive corners)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// In-memory frame of `W` x `H` pixels
#[derive(Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    /// Pixel rows, top to bottom
    rows: [[Rgb565; W]; H],
    /// Whether the frame changed since the last present
    dirty: bool,
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create a new black frame
    pub const fn new() -> Self {
        Self {
            rows: [[Rgb565::BLACK; W]; H],
            dirty: true,
        }
    }

    /// Color at (`x`, `y`), or None outside the frame
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        let (x, y) = Self::index(x, y)?;
        Some(self.rows[y][x])
    }

    /// Number of non-black pixels
    pub fn lit_pixels(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|p| **p != Rgb565::BLACK)
            .count()
    }

    /// Bounds of everything drawn, or None for a black frame
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bounds: Option<BoundingBox> = None;
        for (y, row) in self.rows.iter().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                if *pixel == Rgb565::BLACK {
                    continue;
                }
                let (x, y) = (x as i32, y as i32);
                bounds = Some(match bounds {
                    None => BoundingBox {
                        min_x: x,
                        min_y: y,
                        max_x: x,
                        max_y: y,
                    },
                    Some(b) => BoundingBox {
                        min_x: b.min_x.min(x),
                        min_y: b.min_y.min(y),
                        max_x: b.max_x.max(x),
                        max_y: b.max_y.max(y),
                    },
                });
            }
        }
        bounds
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> Option<&[Rgb565]> {
        self.rows.get(y).map(|r| r.as_slice())
    }

    /// Check if the frame needs pushing to the panel
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark frame as clean (after presenting)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Force the next present to send the frame
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Push the frame to `backend` if it changed
    ///
    /// Returns Ok(true) when a frame was sent and Ok(false) when it was
    /// skipped as clean. The backend must be exactly `W` x `H`. On error the
    /// frame stays dirty.
    pub fn present<B: PanelBackend + ?Sized>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }
        if !backend.is_ready() {
            return Err(DisplayError::NotReady);
        }
        let (width, height) = backend.dimensions();
        if usize::from(width) != W || usize::from(height) != H {
            return Err(DisplayError::InvalidCoordinates);
        }

        for (y, row) in self.rows.iter().enumerate() {
            let y = u16::try_from(y).map_err(|_| DisplayError::InvalidCoordinates)?;
            backend.write_row(y, row)?;
        }
        backend.latch()?;

        self.dirty = false;
        Ok(true)
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < W && y < H).then_some((x, y))
    }

    fn fill_block(&mut self, x: i32, y: i32, size: i32, color: Rgb565) {
        for dy in 0..size {
            for dx in 0..size {
                self.draw_pixel(x + dx, y + dy, color);
            }
        }
    }
}

impl<const W: usize, const H: usize> PixelSurface for FrameBuffer<W, H> {
    fn width(&self) -> i32 {
        W as i32
    }

    fn height(&self) -> i32 {
        H as i32
    }

    fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            row.fill(Rgb565::BLACK);
        }
        self.dirty = true;
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if let Some((x, y)) = Self::index(x, y) {
            self.rows[y][x] = color;
            self.dirty = true;
        }
    }

    fn draw_glyph(&mut self, glyph: char, x: i32, y: i32, scale: u8, color: Rgb565) {
        // Characters outside the font draw nothing
        let Some(columns) = font::glyph(glyph) else {
            return;
        };
        let size = scale as i32;

        for col in 0..FONT_WIDTH {
            for row in 0..FONT_HEIGHT {
                if font::is_lit(columns, col, row) {
                    self.fill_block(x + col as i32 * size, y + row as i32 * size, size, color);
                }
            }
        }
    }
}
