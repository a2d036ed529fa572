use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Source of the single "current time" reading taken at the start of every
/// time-sensitive operation.
///
/// The registry treats the value as authoritative; it never polls mid
/// operation and never reconciles clock skew.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Used by the test suite to step through window boundaries exactly; also
/// suitable for simulation hosts that replay operations at recorded times.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Jump to an absolute time. Going backwards is not prevented here; the
    /// registry assumes a non-decreasing clock, so tests should only move
    /// forwards.
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    /// Advance the clock by the given amount.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
