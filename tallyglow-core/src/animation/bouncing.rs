//! Counter bouncing around the panel

use rand::RngCore;

use super::layout::{GlyphLayout, Point};
use super::{Animation, AnimationStyle, Frame, Timer};
use crate::color::{random_wheel_color, Rgb565};
use crate::config::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::random;
use crate::time::{Duration, Instant};
use crate::traits::PixelSurface;

/// Slowest per-axis speed (px per frame)
pub const MIN_SPEED: i32 = 1;

/// Fastest per-axis speed (px per frame)
pub const MAX_SPEED: i32 = 2;

/// Counter moving like a screensaver, changing color on every wall hit
#[derive(Debug, Clone)]
pub struct BouncingCounter {
    timer: Timer,
    layout: GlyphLayout,
    color: Rgb565,
    /// Panel size used to pick start positions
    bounds: (i32, i32),
    position: Point,
    /// -1 or +1 per axis
    direction: (i32, i32),
    speed: (i32, i32),
}

/// Keep one axis inside `[0, limit]`, pointing the direction away from
/// the wall it touched
///
/// Returns true on a bounce.
fn bounce_axis(position: &mut i32, direction: &mut i32, limit: i32) -> bool {
    if *position <= 0 {
        *position = 0;
        *direction = 1;
        true
    } else if *position >= limit {
        *position = limit;
        *direction = -1;
        true
    } else {
        false
    }
}

impl BouncingCounter {
    /// Create for the default panel size
    pub fn new<R: RngCore + ?Sized>(
        duration: Duration,
        layout: GlyphLayout,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        Self::for_panel(duration, layout, PANEL_WIDTH, PANEL_HEIGHT, now, rng)
    }

    /// Create with a random start inside a `width` x `height` panel
    pub fn for_panel<R: RngCore + ?Sized>(
        duration: Duration,
        layout: GlyphLayout,
        width: i32,
        height: i32,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let mut anim = Self {
            timer: Timer::new(duration, now),
            layout,
            color: Rgb565::BLACK,
            bounds: (width, height),
            position: Point::default(),
            direction: (1, 1),
            speed: (MIN_SPEED, MIN_SPEED),
        };
        anim.on_reset(rng);
        anim
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> (i32, i32) {
        self.direction
    }

    pub fn speed(&self) -> (i32, i32) {
        self.speed
    }

    /// Advance one step and resolve wall hits on a `width` x `height` panel
    ///
    /// Returns true if any axis bounced.
    fn step<R: RngCore + ?Sized>(&mut self, width: i32, height: i32, rng: &mut R) -> bool {
        self.bounds = (width, height);
        let max = self.layout.max_origin(width, height);

        self.position.x += self.direction.0 * self.speed.0;
        self.position.y += self.direction.1 * self.speed.1;

        let mut bounced = false;
        if bounce_axis(&mut self.position.x, &mut self.direction.0, max.x) {
            self.color = random_wheel_color(rng);
            bounced = true;
        }
        if bounce_axis(&mut self.position.y, &mut self.direction.1, max.y) {
            self.color = random_wheel_color(rng);
            bounced = true;
        }
        bounced
    }
}

impl Animation for BouncingCounter {
    fn style(&self) -> AnimationStyle {
        AnimationStyle::BouncingCounter
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
        self.timer.take_first_draw();

        let width = frame.surface.width();
        let height = frame.surface.height();
        self.step(width, height, &mut *frame.rng);

        frame.surface.clear();
        self.layout
            .draw_counter(&mut *frame.surface, counter, self.position, self.color);

        // Always moving
        true
    }

    fn on_reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.color = random_wheel_color(rng);

        let max = self.layout.max_origin(self.bounds.0, self.bounds.1);
        self.position = Point::new(
            random::inclusive(rng, 0, max.x),
            random::inclusive(rng, 0, max.y),
        );
        self.direction = (random::sign(rng), random::sign(rng));
        self.speed = (
            random::inclusive(rng, MIN_SPEED, MAX_SPEED),
            random::inclusive(rng, MIN_SPEED, MAX_SPEED),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::color_wheel;
    use crate::testutil::{RecordingSurface, ScriptedRng};
    use crate::time::{duration_ms, instant_ms};
    use proptest::prelude::*;

    /// Script for construction: color, x, y, dir x, dir y, speed x, speed y
    fn build(script: &[u32]) -> (BouncingCounter, ScriptedRng) {
        let mut rng = ScriptedRng::new(script);
        let anim = BouncingCounter::new(
            duration_ms(60_000),
            GlyphLayout::default(),
            instant_ms(0),
            &mut rng,
        );
        (anim, rng)
    }

    #[test]
    fn test_reset_samples_state() {
        // x: 4 % 11, y: 20 % 17, dir: even -> +1, odd -> -1, speed: 1 + n % 2
        let (anim, rng) = build(&[85, 4, 20, 0, 1, 1, 0]);
        assert_eq!(anim.color(), color_wheel(85));
        assert_eq!(anim.position(), Point::new(4, 3));
        assert_eq!(anim.direction(), (1, -1));
        assert_eq!(anim.speed(), (2, 1));
        assert_eq!(rng.draws(), 7);
    }

    #[test]
    fn test_moves_and_redraws_every_frame() {
        let (mut anim, mut rng) = build(&[85, 4, 20, 0, 1, 1, 0]);
        let mut surface = RecordingSurface::new(64, 32);

        assert!(anim.draw(5, &mut Frame::new(&mut surface, &mut rng, instant_ms(0))));
        assert_eq!(anim.position(), Point::new(6, 2));
        assert_eq!(surface.clears(), 1);

        let block = surface.last_block(5);
        assert_eq!((block[0].x, block[0].y), (6, 2));
        assert_eq!(block[0].color, color_wheel(85));
    }

    #[test]
    fn test_bounces_off_top_and_recolors() {
        // Start at (4, 1) heading up at speed 2
        let (mut anim, _) = build(&[85, 4, 1, 0, 1, 0, 1]);
        assert_eq!(anim.direction(), (1, -1));
        assert_eq!(anim.speed(), (1, 2));

        let mut surface = RecordingSurface::new(64, 32);
        let mut rng_bounce = ScriptedRng::new(&[170]);
        anim.draw(0, &mut Frame::new(&mut surface, &mut rng_bounce, instant_ms(0)));

        assert_eq!(anim.position(), Point::new(5, 0));
        assert_eq!(anim.direction(), (1, 1));
        assert_eq!(anim.color(), color_wheel(170));
        assert_eq!(rng_bounce.draws(), 1);
    }

    #[test]
    fn test_bounces_off_right_edge() {
        // Start at max x (10) heading right
        let (mut anim, _) = build(&[0, 10, 8, 0, 0, 0, 0]);
        let mut surface = RecordingSurface::new(64, 32);
        let mut rng = ScriptedRng::new(&[42]);

        anim.draw(0, &mut Frame::new(&mut surface, &mut rng, instant_ms(0)));
        assert_eq!(anim.position().x, 10);
        assert_eq!(anim.direction().0, -1);
        assert_eq!(anim.color(), color_wheel(42));

        anim.draw(0, &mut Frame::new(&mut surface, &mut rng, instant_ms(100)));
        assert_eq!(anim.position().x, 9);
    }

    #[test]
    fn test_reset_rearms_timer() {
        let (mut anim, mut rng) = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert!(anim.is_complete(instant_ms(60_000)));
        anim.reset(instant_ms(60_000), &mut rng);
        assert!(!anim.is_complete(instant_ms(60_000)));
        assert!(anim.timer().first_draw_pending());
    }

    proptest! {
        #[test]
        fn prop_stays_on_panel(
            seed in proptest::collection::vec(any::<u32>(), 1..32),
            width in 1i32..96,
            height in 1i32..48,
            frames in 1usize..200,
        ) {
            let layout = GlyphLayout::default();
            let mut rng = ScriptedRng::new(&seed);
            let mut anim = BouncingCounter::for_panel(
                duration_ms(60_000), layout, width, height, instant_ms(0), &mut rng,
            );
            let mut surface = RecordingSurface::new(width, height);
            let max = layout.max_origin(width, height);

            for tick in 0..frames {
                let before = anim.direction();
                anim.draw(0, &mut Frame::new(&mut surface, &mut rng, instant_ms(tick as u64)));
                let pos = anim.position();
                prop_assert!(pos.x >= 0 && pos.x <= max.x);
                prop_assert!(pos.y >= 0 && pos.y <= max.y);

                let after = anim.direction();
                let touched_x = pos.x == 0 || pos.x == max.x;
                let touched_y = pos.y == 0 || pos.y == max.y;
                if before.0 != after.0 {
                    prop_assert!(touched_x);
                }
                if before.1 != after.1 {
                    prop_assert!(touched_y);
                }
            }
        }
    }
}
