//! Source of "today" for the date-window rules.

use time::{Date, OffsetDateTime};

pub trait Clock {
    /// The calendar date rules are evaluated against.
    fn today(&self) -> Date;
}

/// Wall clock, UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// A clock pinned to one date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
