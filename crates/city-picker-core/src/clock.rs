// crates/city-picker-core/src/clock.rs
//! Time sources for the debounce timers.
//!
//! All timed operations in this crate take an explicit `now: Duration`
//! measured from an arbitrary epoch. A [`Clock`] is how callers obtain it:
//! native front ends use [`SystemClock`], tests and hosts that already have
//! a timestamp (e.g. `performance.now()` in a browser) use [`ManualClock`].

use std::cell::Cell;
use std::time::Duration;

pub trait Clock {
    /// Time elapsed since this clock's epoch.
    fn now(&self) -> Duration;
}

/// Monotonic wall clock anchored at construction time.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    /// Set from a millisecond timestamp. Negative and NaN clamp to zero,
    /// anything past the `Duration` range to `Duration::MAX`.
    pub fn set_millis(&self, millis: f64) {
        let now = if millis.is_nan() || millis <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX)
        };
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_on_request() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(150));
        clock.advance(Duration::from_millis(50));
        assert_eq!(clock.now(), Duration::from_millis(200));
        clock.set_millis(16.0);
        assert_eq!(clock.now(), Duration::from_millis(16));
    }

    #[test]
    fn out_of_range_millis_are_clamped() {
        let clock = ManualClock::new();
        clock.set_millis(f64::INFINITY);
        assert_eq!(clock.now(), Duration::MAX);
        clock.set_millis(1e300);
        assert_eq!(clock.now(), Duration::MAX);
        clock.set_millis(f64::NAN);
        assert_eq!(clock.now(), Duration::ZERO);
        clock.set_millis(-5.0);
        assert_eq!(clock.now(), Duration::ZERO);
    }
}
