//! Outer tick loop driver
//!
//! Wires a display surface, a counter source and the animation manager
//! together. The board's main loop calls [`CounterDisplay::poll`] as often
//! as it likes; frames are paced to the configured interval.

use rand::RngCore;

use crate::animation::{AnimationManager, AnimationStyle};
use crate::config::FRAME_INTERVAL_MS;
use crate::random::DefaultRng;
use crate::time::{duration_ms, elapsed_since, Duration, Instant};
use crate::traits::{CounterSource, PixelSurface};

/// Frame counters since `start`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Ticks that ran the manager
    pub frames: u32,
    /// Ticks that asked for a panel refresh
    pub refreshes: u32,
    /// Counter value passed on the last tick
    pub last_counter: u32,
}

/// Counter display: surface, counter source and animation rotation
pub struct CounterDisplay<S, C, R = DefaultRng> {
    surface: S,
    source: C,
    manager: AnimationManager<R>,
    frame_interval: Duration,
    last_frame: Option<Instant>,
    stats: FrameStats,
}

impl<S, C, R> CounterDisplay<S, C, R>
where
    S: PixelSurface,
    C: CounterSource,
    R: RngCore,
{
    pub fn new(surface: S, source: C, manager: AnimationManager<R>) -> Self {
        Self {
            surface,
            source,
            manager,
            frame_interval: duration_ms(FRAME_INTERVAL_MS as u64),
            last_frame: None,
            stats: FrameStats::default(),
        }
    }

    /// Override the frame pacing used by [`poll`](Self::poll)
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Clear the panel and initialise the animation rotation
    pub fn start(&mut self, now: Instant) {
        self.surface.clear();
        self.manager.init(now);
        self.last_frame = None;
        self.stats = FrameStats::default();
    }

    /// Run one frame unconditionally
    ///
    /// Returns true when the panel must be refreshed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let counter = self.source.value(now);
        let refresh = self.manager.update(&mut self.surface, counter, now);

        self.last_frame = Some(now);
        self.stats.frames = self.stats.frames.wrapping_add(1);
        self.stats.last_counter = counter;
        if refresh {
            self.stats.refreshes = self.stats.refreshes.wrapping_add(1);
        }
        refresh
    }

    /// Run a frame if one is due
    ///
    /// Returns None when the frame interval has not yet elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        if !self.is_frame_due(now) {
            return None;
        }
        Some(self.tick(now))
    }

    /// Check if the frame interval has elapsed since the last tick
    pub fn is_frame_due(&self, now: Instant) -> bool {
        match self.last_frame {
            Some(last) => elapsed_since(last, now) >= self.frame_interval,
            None => true,
        }
    }

    /// Style currently on the panel
    pub fn current_style(&self) -> Option<AnimationStyle> {
        self.manager.current_style()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn source_mut(&mut self) -> &mut C {
        &mut self.source
    }

    pub fn manager(&self) -> &AnimationManager<R> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut AnimationManager<R> {
        &mut self.manager
    }

    /// Take the parts back
    pub fn into_parts(self) -> (S, C, AnimationManager<R>) {
        (self.surface, self.source, self.manager)
    }
}
