//! Fixed-cadence autoplay timer.
//!
//! The timer does not own a clock; the host feeds elapsed time through
//! [`AutoplayTimer::tick`] from its frame loop. A timer exists only while the
//! sequencer is playing, so dropping it is the cancellation.

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    /// Arm a fresh timer with no elapsed time.
    pub fn armed(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Accumulate `dt` and return how many whole intervals completed,
    /// saturating at `u32::MAX`. The remainder carries into the next tick.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let elapsed = self.elapsed.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();
        let rem = elapsed % interval;
        // rem < interval, so its whole seconds fit back into a Duration.
        self.elapsed = Duration::new(
            (rem / NANOS_PER_SEC) as u64,
            (rem % NANOS_PER_SEC) as u32,
        );
        u32::try_from(elapsed / interval).unwrap_or(u32::MAX)
    }
}
