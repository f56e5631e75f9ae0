//! Animation manager
//!
//! Owns one instance per enabled style and rotates between them. The
//! active style is the only state; it advances when its timer expires.
//!
//! ```text
//! Uninitialized --init()--> Active(first enabled)
//!                      \--> Inert (nothing enabled)
//! Active(s) --timer expired--> Active(next enabled after s, wrapping)
//!                         \--> Active(s), restarted in place (s is the only one)
//! Active(s) --set_animation_style(t)--> Active(t), restarted
//! ```

use rand::RngCore;

use super::color_transition::ColorTransition;
use super::layout::GlyphLayout;
use super::{
    Animation, AnimationStyle, AnyAnimation, BouncingCounter, Frame, RandomPosition,
    SimpleCounter, StyleError,
};
use crate::config::AnimationConfig;
use crate::random::{self, DefaultRng};
use crate::time::{Duration, Instant};
use crate::traits::PixelSurface;

/// Rotation state machine over the enabled animation styles
pub struct AnimationManager<R = DefaultRng> {
    /// Table consulted by `init`
    config: AnimationConfig,
    /// One slot per declared style; disabled styles stay empty
    slots: [Option<AnyAnimation>; AnimationStyle::COUNT],
    /// Currently shown style; None before init or when nothing is enabled
    active: Option<AnimationStyle>,
    initialized: bool,
    rng: R,
}

impl AnimationManager<DefaultRng> {
    /// Create with the default generator seeded from the configuration
    pub fn from_config(config: AnimationConfig) -> Self {
        let rng = random::seeded(config.seed);
        Self::new(config, rng)
    }
}

impl<R: RngCore> AnimationManager<R> {
    /// Create an uninitialized manager
    ///
    /// No animation exists until [`init`](Self::init) runs.
    pub fn new(config: AnimationConfig, rng: R) -> Self {
        Self {
            config,
            slots: [None, None, None, None],
            active: None,
            initialized: false,
            rng,
        }
    }

    /// Construct every enabled style and select the first one
    ///
    /// Calling this again only fills slots that are still empty.
    pub fn init(&mut self, now: Instant) {
        if let Err(e) = self.config.validate() {
            warn!("Invalid glyph layout ({:?}), using default", e);
            self.config.layout = GlyphLayout::default();
        }

        for style in AnimationStyle::ALL {
            if self.config.is_enabled(style) && self.slots[style.index()].is_none() {
                let animation = self.construct(style, now);
                self.slots[style.index()] = Some(animation);
            }
        }
        self.initialized = true;

        self.active = AnimationStyle::ALL
            .into_iter()
            .find(|style| self.is_available(*style));

        match self.active {
            Some(style) => info!("Animation manager initialized, starting with {:?}", style),
            None => warn!("No animations are enabled"),
        }
    }

    /// Advance the rotation and draw the active style
    ///
    /// When the active style has expired, this switches to the next one and
    /// returns true without drawing; the new style draws on the next tick.
    /// Otherwise the result of the style's `draw` is returned. An inert or
    /// uninitialized manager does nothing and returns false.
    pub fn update<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        counter: u32,
        now: Instant,
    ) -> bool {
        let Some(style) = self.active else {
            return false;
        };
        let Some(animation) = self.slots[style.index()].as_mut() else {
            error!("Animation style {:?} not initialized", style);
            return false;
        };

        if animation.is_complete(now) {
            debug!("Animation style {:?} completed, switching to next", style);
            self.next_animation(now);
            return true;
        }

        let mut frame = Frame::new(surface, &mut self.rng, now);
        animation.draw(counter, &mut frame)
    }

    /// Make `style` active and restart it
    ///
    /// Rejected (state unchanged) if the style is disabled or has no
    /// instance.
    pub fn set_animation_style(&mut self, style: AnimationStyle, now: Instant) -> Result<(), StyleError> {
        self.check_available(style)?;
        self.activate(style, now);
        info!("Switched to animation style {:?}", style);
        Ok(())
    }

    /// Make the style with raw identifier `id` active
    pub fn set_animation_style_id(&mut self, id: u8, now: Instant) -> Result<(), StyleError> {
        let style = AnimationStyle::try_from(id).map_err(reject)?;
        self.set_animation_style(style, now)
    }

    /// Change the cycle length of one style, active or not
    ///
    /// The style's start time is kept, so a shorter duration may complete
    /// it on the next update.
    pub fn set_animation_duration(
        &mut self,
        style: AnimationStyle,
        duration: Duration,
    ) -> Result<(), StyleError> {
        self.check_available(style)?;
        if let Some(animation) = self.slots[style.index()].as_mut() {
            animation.set_duration(duration);
        }
        info!("Set duration for {:?} to {} ms", style, duration.ticks());
        Ok(())
    }

    /// Change the cycle length of the style with raw identifier `id`
    pub fn set_animation_duration_id(&mut self, id: u8, duration: Duration) -> Result<(), StyleError> {
        let style = AnimationStyle::try_from(id).map_err(reject)?;
        self.set_animation_duration(style, duration)
    }

    /// Style currently shown, if any
    pub fn current_style(&self) -> Option<AnimationStyle> {
        self.active
    }

    /// Check if `init` has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Check if the manager was initialised with nothing enabled
    pub fn is_inert(&self) -> bool {
        self.initialized && self.active.is_none()
    }

    /// Instance for a style, if it was constructed
    pub fn animation(&self, style: AnimationStyle) -> Option<&AnyAnimation> {
        self.slots[style.index()].as_ref()
    }

    pub fn animation_mut(&mut self, style: AnimationStyle) -> Option<&mut AnyAnimation> {
        self.slots[style.index()].as_mut()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    fn construct(&mut self, style: AnimationStyle, now: Instant) -> AnyAnimation {
        let layout = self.config.layout;
        let duration = self.config.style(style).duration();
        match style {
            AnimationStyle::SimpleCounter => SimpleCounter::new(duration, layout, now).into(),
            AnimationStyle::RandomPosition => RandomPosition::new(duration, layout, now).into(),
            AnimationStyle::ColorTransition => ColorTransition::new(
                duration,
                self.config.color_transition(),
                layout,
                now,
                &mut self.rng,
            )
            .into(),
            AnimationStyle::BouncingCounter => BouncingCounter::for_panel(
                duration,
                layout,
                self.config.panel_width,
                self.config.panel_height,
                now,
                &mut self.rng,
            )
            .into(),
        }
    }

    fn is_available(&self, style: AnimationStyle) -> bool {
        self.config.is_enabled(style) && self.slots[style.index()].is_some()
    }

    fn check_available(&self, style: AnimationStyle) -> Result<(), StyleError> {
        if !self.config.is_enabled(style) {
            return Err(reject(StyleError::Disabled(style)));
        }
        if self.slots[style.index()].is_none() {
            return Err(reject(StyleError::NotConstructed(style)));
        }
        Ok(())
    }

    fn activate(&mut self, style: AnimationStyle, now: Instant) {
        self.active = Some(style);
        if let Some(animation) = self.slots[style.index()].as_mut() {
            animation.reset(now, &mut self.rng);
        }
    }

    /// Next available style after `from`, at most one lap, excluding `from`
    fn find_next_available(&self, from: AnimationStyle) -> Option<AnimationStyle> {
        let mut style = from;
        for _ in 1..AnimationStyle::COUNT {
            style = style.next();
            if self.is_available(style) {
                return Some(style);
            }
        }
        None
    }

    fn next_animation(&mut self, now: Instant) {
        let Some(current) = self.active else {
            return;
        };

        match self.find_next_available(current) {
            Some(next) => {
                self.activate(next, now);
                info!("Switched to animation style {:?}", next);
            }
            None => {
                // Only one style enabled: restart it so it keeps cycling
                self.activate(current, now);
                debug!("No other enabled animations, restarting {:?}", current);
            }
        }
    }
}

fn reject(err: StyleError) -> StyleError {
    warn!("Animation request rejected: {:?}", err);
    err
}
