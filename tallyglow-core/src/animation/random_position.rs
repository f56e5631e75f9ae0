//! Counter parked at a random position

use rand::RngCore;

use super::layout::{GlyphLayout, Point};
use super::{Animation, AnimationStyle, Frame, Timer};
use crate::color::{random_wheel_color, Rgb565, COUNTER_COLOR};
use crate::random;
use crate::time::{Duration, Instant};
use crate::traits::PixelSurface;

/// Counter drawn at a random spot that stays fixed for the whole cycle
///
/// The spot is picked lazily on the first draw after construction or reset,
/// because only then are the panel dimensions known. That first draw only
/// requests a refresh and renders nothing.
#[derive(Debug, Clone)]
pub struct RandomPosition {
    timer: Timer,
    layout: GlyphLayout,
    color: Rgb565,
    /// None until the first draw of a cycle
    origin: Option<Point>,
}

impl RandomPosition {
    pub fn new(duration: Duration, layout: GlyphLayout, now: Instant) -> Self {
        Self::with_color(duration, layout, COUNTER_COLOR, now)
    }

    pub fn with_color(duration: Duration, layout: GlyphLayout, color: Rgb565, now: Instant) -> Self {
        Self {
            timer: Timer::new(duration, now),
            layout,
            color,
            origin: None,
        }
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    /// Position chosen for the current cycle, if any
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Pick a spot that keeps the whole block on a `width` x `height` panel
    fn choose_origin<R: RngCore + ?Sized>(&mut self, rng: &mut R, width: i32, height: i32) -> Point {
        let max = self.layout.max_origin(width, height);
        let origin = Point::new(
            random::inclusive(rng, 0, max.x),
            random::inclusive(rng, 0, max.y),
        );
        debug!("Random counter position: ({}, {})", origin.x, origin.y);
        self.origin = Some(origin);
        origin
    }
}

impl Animation for RandomPosition {
    fn style(&self) -> AnimationStyle {
        AnimationStyle::RandomPosition
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
        let width = frame.surface.width();
        let height = frame.surface.height();

        if self.timer.take_first_draw() {
            self.choose_origin(&mut *frame.rng, width, height);
            return true;
        }

        let origin = match self.origin {
            Some(origin) => origin,
            None => self.choose_origin(&mut *frame.rng, width, height),
        };
        self.layout
            .draw_counter(&mut *frame.surface, counter, origin, self.color);

        false
    }

    fn on_reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        // Position is re-picked on the next draw
        self.color = random_wheel_color(rng);
    }
}
