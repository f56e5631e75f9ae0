//! Counter value sources
//!
//! The tick loop only reads "the latest value"; who writes it is up to the
//! source. Two are provided: a local incrementing counter for standalone
//! operation, and an atomic cell that a separate fetch task publishes into.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::config::COUNTER_UPDATE_INTERVAL_MS;
use crate::time::{duration_ms, elapsed_since, Duration, Instant};
pub use crate::traits::CounterSource;

/// Local counter that ticks up by one every update interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementingCounter {
    value: u32,
    last_update: Instant,
    interval: Duration,
}

impl IncrementingCounter {
    /// Start at zero with the default update interval
    pub fn new(now: Instant) -> Self {
        Self::with_interval(duration_ms(COUNTER_UPDATE_INTERVAL_MS as u64), now)
    }

    pub fn with_interval(interval: Duration, now: Instant) -> Self {
        Self {
            value: 0,
            last_update: now,
            interval,
        }
    }

    /// Advance if a full interval has passed since the last increment
    ///
    /// Returns true when the value changed. At most one step is taken per
    /// call and the next interval is measured from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if elapsed_since(self.last_update, now) < self.interval {
            return false;
        }
        self.last_update = now;
        self.value = self.value.wrapping_add(1);
        debug!("Counter updated to {} at {} ms", self.value, now.ticks());
        true
    }

    /// Current value without advancing
    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn set(&mut self, value: u32) {
        self.value = value;
    }
}

impl CounterSource for IncrementingCounter {
    fn value(&mut self, now: Instant) -> u32 {
        self.poll(now);
        self.value
    }
}

/// Counter cell shared between a fetch task and the display tick
///
/// Can live in a `static`.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: AtomicU32,
    last_fetch_ok: AtomicBool,
}

impl SharedCounter {
    pub const fn new(initial: u32) -> Self {
        Self {
            value: AtomicU32::new(initial),
            last_fetch_ok: AtomicBool::new(false),
        }
    }

    /// Store a freshly fetched value
    pub fn publish(&self, value: u32) {
        self.value.store(value, Ordering::Release);
        self.last_fetch_ok.store(true, Ordering::Release);
    }

    /// Record a failed fetch; the last good value stays visible
    pub fn mark_failed(&self) {
        self.last_fetch_ok.store(false, Ordering::Release);
    }

    pub fn load(&self) -> u32 {
        self.value.load(Ordering::Acquire)
    }

    /// Whether the most recent fetch succeeded
    pub fn is_last_fetch_ok(&self) -> bool {
        self.last_fetch_ok.load(Ordering::Acquire)
    }
}

impl CounterSource for &SharedCounter {
    fn value(&mut self, _now: Instant) -> u32 {
        self.load()
    }
}
