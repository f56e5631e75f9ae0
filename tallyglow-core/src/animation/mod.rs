//! Animation subsystem
//!
//! Each style is a small time-driven renderer with its own motion and color
//! state. The [`AnimationManager`] owns one instance per enabled style and
//! rotates between them as their timers expire.

pub mod bouncing;
pub mod color_transition;
pub mod layout;
pub mod manager;
pub mod random_position;
pub mod simple;
pub mod timer;

use core::fmt;

use rand::RngCore;

use crate::time::{Duration, Instant};
use crate::traits::PixelSurface;

pub use bouncing::BouncingCounter;
pub use color_transition::ColorTransition;
pub use layout::{GlyphLayout, Point};
pub use manager::AnimationManager;
pub use random_position::RandomPosition;
pub use simple::SimpleCounter;
pub use timer::Timer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Animation styles in rotation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AnimationStyle {
    /// Counter centered on the panel
    SimpleCounter = 0,
    /// Counter parked at a random spot each cycle
    RandomPosition = 1,
    /// Centered counter fading between colors
    ColorTransition = 2,
    /// Counter bouncing off the panel edges
    BouncingCounter = 3,
}

impl AnimationStyle {
    /// Number of declared styles
    pub const COUNT: usize = 4;

    /// All styles in declared order
    pub const ALL: [Self; Self::COUNT] = [
        Self::SimpleCounter,
        Self::RandomPosition,
        Self::ColorTransition,
        Self::BouncingCounter,
    ];

    /// Position in the declared order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Style at a position in the declared order
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Style following this one, wrapping around
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SimpleCounter => "simple-counter",
            Self::RandomPosition => "random-position",
            Self::ColorTransition => "color-transition",
            Self::BouncingCounter => "bouncing-counter",
        }
    }
}

impl TryFrom<u8> for AnimationStyle {
    type Error = StyleError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_index(id as usize).ok_or(StyleError::OutOfRange(id))
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a manager operation on a style is rejected
///
/// A rejected operation leaves the manager unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StyleError {
    /// Identifier does not name a declared style
    OutOfRange(u8),
    /// Style is disabled in configuration
    Disabled(AnimationStyle),
    /// Style is enabled but has no instance (manager not initialised)
    NotConstructed(AnimationStyle),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::OutOfRange(id) => write!(f, "invalid animation style: {}", id),
            StyleError::Disabled(style) => {
                write!(f, "animation style {} is disabled in configuration", style)
            }
            StyleError::NotConstructed(style) => {
                write!(f, "animation style {} not initialized", style)
            }
        }
    }
}

/// Everything a style needs to render one tick
pub struct Frame<'a, S: ?Sized, R: ?Sized> {
    /// Panel being drawn on
    pub surface: &'a mut S,
    /// Source of randomness for positions and colors
    pub rng: &'a mut R,
    /// Tick timestamp
    pub now: Instant,
}

impl<'a, S: PixelSurface + ?Sized, R: RngCore + ?Sized> Frame<'a, S, R> {
    pub fn new(surface: &'a mut S, rng: &'a mut R, now: Instant) -> Self {
        Self { surface, rng, now }
    }
}

/// Common contract of all animation styles
pub trait Animation {
    /// Style tag of this animation
    fn style(&self) -> AnimationStyle;

    fn timer(&self) -> &Timer;

    fn timer_mut(&mut self) -> &mut Timer;

    /// Render one frame of the counter
    ///
    /// Returns true when the panel must be refreshed for this frame.
    fn draw<S, R>(&mut self, counter: u32, frame: &mut Frame<'_, S, R>) -> bool
    where
        S: PixelSurface + ?Sized,
        R: RngCore + ?Sized;

    /// Style-specific part of a reset, run after the timer is re-armed
    fn on_reset<R: RngCore + ?Sized>(&mut self, _rng: &mut R) {}

    /// Restart the cycle at `now`
    ///
    /// The timer is always re-armed; styles customise `on_reset` instead of
    /// overriding this.
    fn reset<R: RngCore + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        self.timer_mut().rearm(now);
        self.on_reset(rng);
    }

    /// Check if the cycle has run its full duration
    fn is_complete(&self, now: Instant) -> bool {
        self.timer().is_complete(now)
    }

    /// Change the cycle length without restarting it
    fn set_duration(&mut self, duration: Duration) {
        self.timer_mut().set_duration(duration);
    }
}

/// One instance of any style, dispatched by match
#[derive(Debug, Clone)]
pub enum AnyAnimation {
    SimpleCounter(SimpleCounter),
    RandomPosition(RandomPosition),
    ColorTransition(ColorTransition),
    BouncingCounter(BouncingCounter),
}

macro_rules! dispatch {
    ($self:expr, $anim:ident => $body:expr) => {
        match $self {
            AnyAnimation::SimpleCounter($anim) => $body,
            AnyAnimation::RandomPosition($anim) => $body,
            AnyAnimation::ColorTransition($anim) => $body,
            AnyAnimation::BouncingCounter($anim) => $body,
        }
    };
}

impl Animation for AnyAnimation {
    fn style(&self) -> AnimationStyle {
        dispatch!(self, a => a.style())
    }

    fn timer(&self) -> &Timer {
        dispatch!(self, a => a.timer())
    }

    fn timer_mut(&mut self) -> &mut Timer {
        dispatch!(self, a => a.timer_mut())
    }

    fn draw<S, R>(&mut self, counter: u32, frame: &mut Frame<'_, S, R>) -> bool
    where
        S: PixelSurface + ?Sized,
        R: RngCore + ?Sized,
    {
        dispatch!(self, a => a.draw(counter, frame))
    }

    fn on_reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        dispatch!(self, a => a.on_reset(rng))
    }
}

impl From<SimpleCounter> for AnyAnimation {
    fn from(anim: SimpleCounter) -> Self {
        Self::SimpleCounter(anim)
    }
}

impl From<RandomPosition> for AnyAnimation {
    fn from(anim: RandomPosition) -> Self {
        Self::RandomPosition(anim)
    }
}

impl From<ColorTransition> for AnyAnimation {
    fn from(anim: ColorTransition) -> Self {
        Self::ColorTransition(anim)
    }
}

impl From<BouncingCounter> for AnyAnimation {
    fn from(anim: BouncingCounter) -> Self {
        Self::BouncingCounter(anim)
    }
}
