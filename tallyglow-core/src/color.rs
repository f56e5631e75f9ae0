//! RGB565 colors and color-wheel helpers

use rand::RngCore;

use crate::random;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default counter color (purple-blue)
pub const COUNTER_COLOR: Rgb565 = Rgb565(0x4A1F);

/// 16-bit packed color: 5 bits red, 6 bits green, 5 bits blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Pack 8-bit channels, dropping the low bits
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    /// Pack native-width channels (r: 0-31, g: 0-63, b: 0-31)
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0x1F) as u16) << 11) | (((g & 0x3F) as u16) << 5) | ((b & 0x1F) as u16))
    }

    /// Red channel (0-31)
    pub const fn red(self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    /// Green channel (0-63)
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Interpolate towards `target` by `num / den`
    ///
    /// Each channel is blended in its own bit width. The result is exactly
    /// `self` at `num == 0` and exactly `target` at `num >= den`. A zero
    /// denominator counts as complete.
    pub fn lerp(self, target: Self, num: u64, den: u64) -> Self {
        if den == 0 || num >= den {
            return target;
        }
        let blend = |from: u8, to: u8| -> u8 {
            let from = u64::from(from);
            let to = u64::from(to);
            ((from * (den - num) + to * num) / den) as u8
        };
        Self::from_channels(
            blend(self.red(), target.red()),
            blend(self.green(), target.green()),
            blend(self.blue(), target.blue()),
        )
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

/// Color on a red -> green -> blue wheel
///
/// The wheel is split into three 85-step segments; each one fades one
/// primary out while the next fades in.
pub fn color_wheel(pos: u8) -> Rgb565 {
    if pos < 85 {
        Rgb565::from_rgb888(pos * 3, 255 - pos * 3, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb565::from_rgb888(255 - pos * 3, 0, pos * 3)
    } else {
        let pos = pos - 170;
        Rgb565::from_rgb888(0, pos * 3, 255 - pos * 3)
    }
}

/// Pick a random position on the color wheel
pub fn random_wheel_color<R: RngCore + ?Sized>(rng: &mut R) -> Rgb565 {
    color_wheel(random::below(rng, 256) as u8)
}
