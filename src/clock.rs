//! Time sources for [`Tween`](crate::Tween).
//!
//! All clocks report seconds as `f64`. Only differences between readings are
//! meaningful, so each clock is free to pick its own epoch.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use chrono::Utc;

pub trait Clock {
    /// Current time in seconds.
    fn now(&self) -> f64;
}

/// Wall clock, in seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.
    }
}

/// Seconds elapsed since the clock was created. Unaffected by wall clock
/// adjustments.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a host (or a test) can keep one handle
/// and pass another to a tween.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(now: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1000.);
        let handle = clock.clone();

        handle.advance(1.5);
        assert_eq!(clock.now(), 1001.5);

        clock.set(5.);
        assert_eq!(handle.now(), 5.);
    }

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now() > 1_577_836_800.);
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.);
        assert!(b >= a);
    }

    #[test]
    fn references_are_clocks() {
        fn read<C: Clock>(clock: C) -> f64 {
            clock.now()
        }

        let clock = ManualClock::new(3.);
        assert_eq!(read(&clock), 3.);
    }
}
