//! Centered counter with a continuous color fade

use rand::RngCore;

use super::layout::GlyphLayout;
use super::{Animation, AnimationStyle, Frame, Timer};
use crate::color::{random_wheel_color, Rgb565};
use crate::time::{Duration, Instant};
use crate::traits::PixelSurface;

/// Counter centered on the panel, fading from one color to the next
///
/// Each reset chains the fade: the old target becomes the new start and a
/// fresh target is rolled, so consecutive cycles hand off without a jump.
#[derive(Debug, Clone)]
pub struct ColorTransition {
    timer: Timer,
    layout: GlyphLayout,
    start_color: Rgb565,
    target_color: Rgb565,
    /// Fade window; only used when non-zero and shorter than the cycle
    transition: Duration,
}

impl ColorTransition {
    /// Create with random start and target colors
    pub fn new<R: RngCore + ?Sized>(
        duration: Duration,
        transition: Duration,
        layout: GlyphLayout,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let start_color = random_wheel_color(rng);
        let target_color = random_wheel_color(rng);
        Self::with_colors(duration, transition, layout, start_color, target_color, now)
    }

    pub fn with_colors(
        duration: Duration,
        transition: Duration,
        layout: GlyphLayout,
        start_color: Rgb565,
        target_color: Rgb565,
        now: Instant,
    ) -> Self {
        Self {
            timer: Timer::new(duration, now),
            layout,
            start_color,
            target_color,
            transition,
        }
    }

    pub fn set_color_transition_duration(&mut self, transition: Duration) {
        self.transition = transition;
    }

    pub fn color_transition_duration(&self) -> Duration {
        self.transition
    }

    pub fn start_color(&self) -> Rgb565 {
        self.start_color
    }

    pub fn target_color(&self) -> Rgb565 {
        self.target_color
    }

    /// Window the fade is spread over
    ///
    /// The fade window only wins when it is set and shorter than the cycle;
    /// otherwise the whole cycle is used.
    pub fn effective_duration(&self) -> Duration {
        let duration = self.timer.duration();
        if self.transition.ticks() > 0 && self.transition < duration {
            self.transition
        } else {
            duration
        }
    }

    /// Interpolated color at `now`
    pub fn current_color(&self, now: Instant) -> Rgb565 {
        let window = self.effective_duration().ticks();
        let elapsed = self.timer.elapsed(now).ticks().min(window);
        self.start_color.lerp(self.target_color, elapsed, window)
    }
}

impl Animation for ColorTransition {
    fn style(&self) -> AnimationStyle {
        AnimationStyle::ColorTransition
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

        let color = self.current_color(frame.now);
        let origin = self
            .layout
            .centered_in(frame.surface.width(), frame.surface.height());
        self.layout
            .draw_counter(&mut *frame.surface, counter, origin, color);

        // The color moves every frame
        true
    }

    fn on_reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.start_color = self.target_color;
        self.target_color = random_wheel_color(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::color_wheel;
    use crate::testutil::{RecordingSurface, ScriptedRng};
    use crate::time::{duration_ms, instant_ms};
    use proptest::prelude::*;

    const START: Rgb565 = Rgb565::RED;
    const TARGET: Rgb565 = Rgb565::BLUE;

    fn fade(duration: u64, transition: u64) -> ColorTransition {
        ColorTransition::with_colors(
            duration_ms(duration),
            duration_ms(transition),
            GlyphLayout::default(),
            START,
            TARGET,
            instant_ms(0),
        )
    }

    #[test]
    fn test_endpoints() {
        let anim = fade(1_000, 1_000);
        assert_eq!(anim.current_color(instant_ms(0)), START);
        assert_eq!(anim.current_color(instant_ms(1_000)), TARGET);
        assert_eq!(anim.current_color(instant_ms(5_000)), TARGET);
    }

    #[test]
    fn test_midpoint_blends_channels() {
        let anim = fade(1_000, 1_000);
        // Red 31 -> 0, blue 0 -> 31
        assert_eq!(
            anim.current_color(instant_ms(500)),
            Rgb565::from_channels(15, 0, 15)
        );
    }

    #[test]
    fn test_shorter_transition_wins() {
        let anim = fade(10_000, 2_000);
        assert_eq!(anim.effective_duration().ticks(), 2_000);
        assert_eq!(anim.current_color(instant_ms(2_000)), TARGET);
    }

    #[test]
    fn test_longer_or_zero_transition_falls_back_to_duration() {
        let anim = fade(1_000, 5_000);
        assert_eq!(anim.effective_duration().ticks(), 1_000);

        let anim = fade(1_000, 0);
        assert_eq!(anim.effective_duration().ticks(), 1_000);
    }

    #[test]
    fn test_zero_window_shows_target() {
        let anim = fade(0, 0);
        assert_eq!(anim.current_color(instant_ms(0)), TARGET);
    }

    #[test]
    fn test_draw_always_refreshes_with_current_color() {
        let mut anim = fade(1_000, 1_000);
        let mut surface = RecordingSurface::new(64, 32);
        let mut rng = ScriptedRng::new(&[0]);

        assert!(anim.draw(3, &mut Frame::new(&mut surface, &mut rng, instant_ms(0))));
        assert!(anim.draw(3, &mut Frame::new(&mut surface, &mut rng, instant_ms(1_000))));

        let glyphs = surface.glyphs();
        assert_eq!(glyphs.len(), 10);
        assert_eq!((glyphs[0].x, glyphs[0].y), (5, 8));
        assert_eq!(glyphs[0].color, START);
        assert_eq!(glyphs[5].color, TARGET);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_reset_chains_colors() {
        let mut anim = fade(1_000, 1_000);
        let mut rng = ScriptedRng::new(&[170]);

        anim.reset(instant_ms(1_000), &mut rng);
        assert_eq!(anim.start_color(), TARGET);
        assert_eq!(anim.target_color(), color_wheel(170));
        // Fade restarts from the old target
        assert_eq!(anim.current_color(instant_ms(1_000)), TARGET);
    }

    #[test]
    fn test_new_rolls_both_colors() {
        let mut rng = ScriptedRng::new(&[0, 85]);
        let anim = ColorTransition::new(
            duration_ms(1_000),
            duration_ms(1_000),
            GlyphLayout::default(),
            instant_ms(0),
            &mut rng,
        );
        assert_eq!(anim.start_color(), color_wheel(0));
        assert_eq!(anim.target_color(), color_wheel(85));
    }

    proptest! {
        #[test]
        fn prop_channels_stay_between_endpoints(
            start in any::<u16>(),
            target in any::<u16>(),
            at in 0u64..3_000,
        ) {
            let anim = ColorTransition::with_colors(
                duration_ms(2_000),
                duration_ms(2_000),
                GlyphLayout::default(),
                Rgb565(start),
                Rgb565(target),
                instant_ms(0),
            );
            let color = anim.current_color(instant_ms(at));
            let (s, t) = (Rgb565(start), Rgb565(target));
            prop_assert!(color.red() >= s.red().min(t.red()) && color.red() <= s.red().max(t.red()));
            prop_assert!(color.green() >= s.green().min(t.green()) && color.green() <= s.green().max(t.green()));
            prop_assert!(color.blue() >= s.blue().min(t.blue()) && color.blue() <= s.blue().max(t.blue()));
        }
    }
}
