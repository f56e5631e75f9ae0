//! Test doubles shared by the unit tests

use std::vec::Vec;

use rand::RngCore;

use crate::color::Rgb565;
use crate::traits::PixelSurface;

/// Replays a fixed list of `next_u32` values, wrapping at the end
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }

    /// Number of values consumed so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_u32() as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// One `draw_glyph` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCall {
    pub glyph: char,
    pub x: i32,
    pub y: i32,
    pub scale: u8,
    pub color: Rgb565,
}

/// Surface that records draw calls instead of rasterising them
pub struct RecordingSurface {
    width: i32,
    height: i32,
    glyphs: Vec<GlyphCall>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            glyphs: Vec::new(),
            clears: 0,
        }
    }

    pub fn glyphs(&self) -> &[GlyphCall] {
        &self.glyphs
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Glyphs drawn by the most recent `n`-digit counter render
    pub fn last_block(&self, n: usize) -> &[GlyphCall] {
        &self.glyphs[self.glyphs.len().saturating_sub(n)..]
    }
}

impl PixelSurface for RecordingSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    // Counters are drawn glyph by glyph
    fn draw_pixel(&mut self, _x: i32, _y: i32, _color: Rgb565) {}

    fn draw_glyph(&mut self, glyph: char, x: i32, y: i32, scale: u8, color: Rgb565) {
        self.glyphs.push(GlyphCall {
            glyph,
            x,
            y,
            scale,
            color,
        });
    }
}
