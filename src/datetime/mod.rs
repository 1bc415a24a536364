//! Date and time rules
//!
//! Every date-like input is first normalised to a [`DateValue`]. Parsing
//! happens before any rule logic, so an unparsable input surfaces as
//! [`AssertionError::InvalidDate`] and never as a rule that merely evaluated
//! to `false`.
//!
//! # Example
//!
//! ```rust
//! use touchstone::datetime::{self, DateValue};
//!
//! let release = DateValue::parse("2024-03-15 09:30:00").unwrap();
//! assert!(datetime::is_friday(&release).unwrap());
//! assert!(datetime::is_morning(&release).unwrap());
//! assert!(datetime::is_before(&release, "2024-12-31", false).unwrap());
//!
//! assert!(datetime::is_before("yesterday-ish", "2024-12-31", false).is_err());
//! ```

mod clock;
mod rules;

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike, Weekday,
};

use crate::error::AssertionError;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rules::{
    is_after, is_afternoon, is_before, is_between, is_date_time, is_evening, is_friday,
    is_leap_year, is_monday, is_morning, is_night, is_saturday, is_sunday, is_thursday,
    is_today, is_tomorrow, is_tuesday, is_wednesday, is_weekday, is_weekend, is_yesterday,
    TimeOfDay,
};

/// Format used by [`DateValue`]'s `Display` implementation.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Input that carries its own offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Input without an offset, read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Calendar dates, read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// A normalised point in time.
///
/// Holds the wall-clock date and time together with the UTC offset it was
/// expressed in. Inputs without an offset are taken to be UTC. Comparisons use
/// the underlying instant; calendar rules (weekday, time of day, relative day)
/// use the wall clock in the value's own offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(DateTime<FixedOffset>);

impl DateValue {
    /// Parse a textual date.
    ///
    /// Accepted: RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS[.f][±HH:MM]`,
    /// `YYYY-MM-DDTHH:MM:SS[.f]`, `YYYY-MM-DD HH:MM`, `YYYY/MM/DD HH:MM:SS`,
    /// `YYYY-MM-DD` and `YYYY/MM/DD`. Surrounding whitespace is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use touchstone::datetime::DateValue;
    ///
    /// let a = DateValue::parse("2012-01-01T10:00:00+02:00").unwrap();
    /// let b = DateValue::parse("2012-01-01 08:00:00").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "2012-01-01 10:00:00");
    ///
    /// assert!(DateValue::parse("2012-02-30").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, AssertionError> {
        let trimmed = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(DateValue(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
            return Ok(DateValue(dt));
        }
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
                return Ok(DateValue(dt));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(DateValue::from_naive_utc(naive));
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(DateValue::from_naive_utc(date.and_time(NaiveTime::MIN)));
            }
        }

        Err(AssertionError::invalid_date(input))
    }

    /// Interpret a naive wall-clock time as UTC.
    pub fn from_naive_utc(naive: NaiveDateTime) -> Self {
        DateValue(naive.and_utc().fixed_offset())
    }

    /// The underlying instant, in the value's own offset.
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Seconds since the Unix epoch. Sub-second precision is discarded.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// Wall-clock calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Wall-clock time of day.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Seconds elapsed since local midnight, in `0..86_400`.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.time().num_seconds_from_midnight()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Render with a chrono format string.
    ///
    /// ```rust
    /// use touchstone::datetime::DateValue;
    ///
    /// let v = DateValue::parse("2016-02-29").unwrap();
    /// assert_eq!(v.format("%A %d %B %Y"), "Monday 29 February 2016");
    /// ```
    pub fn format(&self, format: &str) -> String {
        self.0.format(format).to_string()
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl FromStr for DateValue {
    type Err = AssertionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateValue::parse(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue {
    fn from(value: DateTime<Tz>) -> Self {
        let offset = value.offset().fix();
        DateValue(value.with_timezone(&offset))
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        DateValue::from_naive_utc(value)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        DateValue::from_naive_utc(value.and_time(NaiveTime::MIN))
    }
}

/// Anything the date rules accept as input.
///
/// Implemented for text (parsed with [`DateValue::parse`]) and for chrono's
/// date types, which convert infallibly.
pub trait ToDateValue {
    /// Normalise to a [`DateValue`].
    fn to_date_value(&self) -> Result<DateValue, AssertionError>;
}

impl ToDateValue for DateValue {
    fn to_date_value(&self) -> Result<DateValue, AssertionError> {
        Ok(*self)
    }
}

impl ToDateValue for str {
    fn to_date_value(&self) -> Result<DateValue, AssertionError> {
        DateValue::parse(self)
    }
}

impl ToDateValue for String {
    fn to_date_value(&self) -> Result<DateValue, AssertionError> {
        DateValue::parse(self)
    }
}

impl<Tz: TimeZone> ToDateValue for DateTime<Tz> {
    fn to_date_value(&self) -> Result<DateValue, AssertionError> {
        Ok(DateValue::from(self.clone()))
    }
}

impl ToDateValue for NaiveDateTime {
    fn to_date_value(&self) -> Result<DateValue, AssertionError> {
        Ok(DateValue::from(*self))
    }
}

impl ToDateValue for NaiveDate {
    fn to_date_value(&self) -> Result<DateValue, AssertionError> {
        Ok(DateValue::from(*self))
    }
}

impl<T: ToDateValue + ?Sized> ToDateValue for &T {
    fn to_date_value(&self) -> Result<DateValue, AssertionError> {
        (**self).to_date_value()
    }
}
