//! Wall-clock access for the relative-day rules
//!
//! `is_today`, `is_yesterday` and `is_tomorrow` depend on "now", which makes them
//! non-deterministic. They take a [`Clock`] so tests can pin the current time.

use chrono::Local;

use super::DateValue;
use crate::error::AssertionError;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateValue;
}

/// The process wall clock, in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateValue {
        DateValue::from(Local::now())
    }
}

/// A clock stopped at a fixed instant.
///
/// # Example
///
/// ```rust
/// use touchstone::datetime::{self, Clock, FixedClock};
///
/// let clock = FixedClock::parse("2024-01-01 08:00:00").unwrap();
/// assert!(datetime::is_today("2024-01-01 23:00:00", &clock).unwrap());
/// assert!(datetime::is_yesterday("2023-12-31", &clock).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateValue);

impl FixedClock {
    /// Stop the clock at `now`.
    pub fn new(now: DateValue) -> Self {
        FixedClock(now)
    }

    /// Stop the clock at a textual date.
    pub fn parse(now: &str) -> Result<Self, AssertionError> {
        DateValue::parse(now).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateValue {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateValue + Send + Sync,
{
    fn now(&self) -> DateValue {
        self()
    }
}
