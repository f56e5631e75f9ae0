//! Counter value feed

use crate::time::Instant;

/// Supplies the number shown on the panel
///
/// The value may change asynchronously (network fetch, local increment);
/// the tick loop only ever reads the latest one.
pub trait CounterSource {
    /// Latest counter value as of `now`
    fn value(&mut self, now: Instant) -> u32;
}

impl<T: CounterSource + ?Sized> CounterSource for &mut T {
    fn value(&mut self, now: Instant) -> u32 {
        (**self).value(now)
    }
}
