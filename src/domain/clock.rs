//! Injectable clock so checkout timestamps and calendar-day bucketing are
//! deterministic under test instead of reading a live clock inline.

use chrono::{DateTime, FixedOffset, Local};

/// Source of the current local time, offset included.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// Fixed clock for tests.
#[cfg(test)]
pub struct FixedClock(pub DateTime<FixedOffset>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
