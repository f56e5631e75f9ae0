//! Animation cycle timer

use crate::time::{elapsed_since, Duration, Instant};

/// Tracks when an animation started and how long it may run
///
/// Every animation embeds one. The first-draw flag lets a style defer
/// one-time setup (such as picking a position) to its first `draw` after
/// construction or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    start: Instant,
    duration: Duration,
    first_draw_pending: bool,
}

impl Timer {
    /// Start a new cycle at `now`
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            start: now,
            duration,
            first_draw_pending: true,
        }
    }

    /// Check if the cycle has run its full duration
    pub fn is_complete(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// Time since the cycle started
    pub fn elapsed(&self, now: Instant) -> Duration {
        elapsed_since(self.start, now)
    }

    /// Re-arm the cycle at `now`
    pub fn rearm(&mut self, now: Instant) {
        self.start = now;
        self.first_draw_pending = true;
    }

    /// Change the duration without moving the start point
    ///
    /// A duration shorter than the time already elapsed makes the cycle
    /// complete on the next check.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    /// Check if no draw has happened since construction or reset
    pub fn first_draw_pending(&self) -> bool {
        self.first_draw_pending
    }

    /// Consume the first-draw flag, returning whether it was set
    pub fn take_first_draw(&mut self) -> bool {
        core::mem::replace(&mut self.first_draw_pending, false)
    }
}
