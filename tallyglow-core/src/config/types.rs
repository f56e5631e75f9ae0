//! Configuration type definitions
//!
//! These types describe which animation styles run and for how long. With
//! the `serde` feature the table can be loaded from TOML on the host.

use core::fmt;

use crate::animation::layout::GlyphLayout;
use crate::animation::AnimationStyle;
use crate::random::DEFAULT_SEED;
use crate::time::{duration_ms, Duration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel width in pixels (one 64x32 HUB75 panel)
pub const PANEL_WIDTH: i32 = 64;

/// Panel height in pixels
pub const PANEL_HEIGHT: i32 = 32;

/// Main loop cadence
pub const FRAME_INTERVAL_MS: u32 = 100;

/// How often the standalone counter increments
pub const COUNTER_UPDATE_INTERVAL_MS: u32 = 10_000;

/// Maximum digits a `u32` counter can need
pub const MAX_DIGITS: u8 = 10;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Digit count outside 1..=MAX_DIGITS
    InvalidDigits(u8),
    /// Text scale of zero
    InvalidScale,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDigits(n) => {
                write!(f, "digit count {} outside 1..={}", n, MAX_DIGITS)
            }
            ConfigError::InvalidScale => f.write_str("text scale must be at least 1"),
        }
    }
}

/// Per-style settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleConfig {
    /// Whether the style takes part in the rotation
    pub enabled: bool,
    /// How long the style stays active (ms)
    pub duration_ms: u32,
}

impl StyleConfig {
    pub const fn enabled(duration_ms: u32) -> Self {
        Self {
            enabled: true,
            duration_ms,
        }
    }

    pub const fn disabled(duration_ms: u32) -> Self {
        Self {
            enabled: false,
            duration_ms,
        }
    }

    /// Configured duration as a time span
    pub const fn duration(&self) -> Duration {
        duration_ms(self.duration_ms as u64)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::enabled(10_000)
    }
}

/// Animation table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Counter centered on the panel
    pub simple_counter: StyleConfig,
    /// Counter parked at a random spot each cycle
    pub random_position: StyleConfig,
    /// Centered counter fading between colors
    pub color_transition: StyleConfig,
    /// Counter bouncing off the panel edges
    pub bouncing_counter: StyleConfig,
    /// Length of one color fade (ms); only used when shorter than the
    /// style duration
    pub color_transition_ms: u32,
    /// Digit count and text scale
    pub layout: GlyphLayout,
    /// Panel width used before the first frame reports the real size
    pub panel_width: i32,
    /// Panel height used before the first frame reports the real size
    pub panel_height: i32,
    /// Seed for the animation random generator
    pub seed: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            simple_counter: StyleConfig::disabled(10_000),
            random_position: StyleConfig::enabled(10_000),
            color_transition: StyleConfig::enabled(15_000),
            bouncing_counter: StyleConfig::enabled(60_000),
            color_transition_ms: 15_000,
            layout: GlyphLayout::default(),
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

impl AnimationConfig {
    /// Default table with only `styles` enabled
    pub fn only(styles: &[AnimationStyle]) -> Self {
        let mut config = Self::default();
        for style in AnimationStyle::ALL {
            config.style_mut(style).enabled = styles.contains(&style);
        }
        config
    }

    /// Replace the settings for one style
    pub fn with_style(mut self, style: AnimationStyle, enabled: bool, duration_ms: u32) -> Self {
        *self.style_mut(style) = StyleConfig {
            enabled,
            duration_ms,
        };
        self
    }

    /// Settings for a style
    pub fn style(&self, style: AnimationStyle) -> &StyleConfig {
        match style {
            AnimationStyle::SimpleCounter => &self.simple_counter,
            AnimationStyle::RandomPosition => &self.random_position,
            AnimationStyle::ColorTransition => &self.color_transition,
            AnimationStyle::BouncingCounter => &self.bouncing_counter,
        }
    }

    /// Mutable settings for a style
    pub fn style_mut(&mut self, style: AnimationStyle) -> &mut StyleConfig {
        match style {
            AnimationStyle::SimpleCounter => &mut self.simple_counter,
            AnimationStyle::RandomPosition => &mut self.random_position,
            AnimationStyle::ColorTransition => &mut self.color_transition,
            AnimationStyle::BouncingCounter => &mut self.bouncing_counter,
        }
    }

    /// Check if a style is enabled
    pub fn is_enabled(&self, style: AnimationStyle) -> bool {
        self.style(style).enabled
    }

    /// Enabled styles in declared order
    pub fn enabled_styles(&self) -> impl Iterator<Item = AnimationStyle> + '_ {
        AnimationStyle::ALL
            .into_iter()
            .filter(move |style| self.is_enabled(*style))
    }

    /// Color fade window as a time span
    pub const fn color_transition(&self) -> Duration {
        duration_ms(self.color_transition_ms as u64)
    }

    /// Validate layout settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.digits == 0 || self.layout.digits > MAX_DIGITS {
            return Err(ConfigError::InvalidDigits(self.layout.digits));
        }
        if self.layout.scale == 0 {
            return Err(ConfigError::InvalidScale);
        }
        Ok(())
    }
}
