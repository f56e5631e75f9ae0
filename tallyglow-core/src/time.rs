//! Millisecond time base
//!
//! Every timestamp is handed in by the caller (normally the tick loop), so
//! nothing in this crate reads a hardware clock.

/// Monotonic timestamp with millisecond resolution
pub type Instant = fugit::TimerInstantU64<1000>;

/// Span of time with millisecond resolution
pub type Duration = fugit::MillisDurationU64;

/// Build an instant from milliseconds since boot
pub const fn instant_ms(ms: u64) -> Instant {
    Instant::from_ticks(ms)
}

/// Build a duration from a millisecond count
pub const fn duration_ms(ms: u64) -> Duration {
    Duration::from_ticks(ms)
}

/// Time elapsed from `start` to `now`
///
/// A clock that appears to run backwards reports zero.
pub fn elapsed_since(start: Instant, now: Instant) -> Duration {
    now.checked_duration_since(start)
        .unwrap_or(Duration::from_ticks(0))
}
