//! Centered static counter

use rand::RngCore;

use super::layout::GlyphLayout;
use super::{Animation, AnimationStyle, Frame, Timer};
use crate::color::{random_wheel_color, Rgb565, COUNTER_COLOR};
use crate::time::{Duration, Instant};
use crate::traits::PixelSurface;

/// Counter centered on the panel in a single color
///
/// The layout never moves, so only the first frame after a reset asks for a
/// refresh. The digits are still redrawn every frame.
#[derive(Debug, Clone)]
pub struct SimpleCounter {
    timer: Timer,
    layout: GlyphLayout,
    color: Rgb565,
}

impl SimpleCounter {
    pub fn new(duration: Duration, layout: GlyphLayout, now: Instant) -> Self {
        Self::with_color(duration, layout, COUNTER_COLOR, now)
    }

    pub fn with_color(duration: Duration, layout: GlyphLayout, color: Rgb565, now: Instant) -> Self {
        Self {
            timer: Timer::new(duration, now),
            layout,
            color,
        }
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }
}

impl Animation for SimpleCounter {
    fn style(&self) -> AnimationStyle {
        AnimationStyle::SimpleCounter
    }

    fn timer(&self) -> &Timer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }

    fn draw<S, R>(&mut self, counter: u32, frame: &mut Frame<'_, S, R>) -> bool
    where
        S: PixelSurface + ?Sized,
        R: RngCore + ?Sized,
    {
        let origin = self
            .layout
            .centered_in(frame.surface.width(), frame.surface.height());
        self.layout
            .draw_counter(&mut *frame.surface, counter, origin, self.color);

        self.timer.take_first_draw()
    }

    fn on_reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.color = random_wheel_color(rng);
    }
}
