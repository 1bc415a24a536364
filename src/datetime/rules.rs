//! Date predicates
//!
//! Each rule normalises its inputs first and returns `Ok(bool)`. An input that
//! does not parse is reported as `Err` before the rule runs.

use chrono::{Days, NaiveDate, Weekday};

use super::{Clock, DateValue, ToDateValue};
use crate::error::AssertionError;

/// Whether `value` normalises to a date at all.
pub fn is_date_time<V: ToDateValue + ?Sized>(value: &V) -> bool {
    value.to_date_value().is_ok()
}

/// Whether `value` lies after `limit`, at one-second granularity.
///
/// # Example
///
/// ```rust
/// use touchstone::datetime::is_after;
///
/// assert!(is_after("2014-01-01 00:00:00", "2013-12-31 23:59:59", false).unwrap());
/// assert!(!is_after("2014-01-01", "2014-01-01", false).unwrap());
/// assert!(is_after("2014-01-01", "2014-01-01", true).unwrap());
/// ```
pub fn is_after<V, L>(value: &V, limit: &L, inclusive: bool) -> Result<bool, AssertionError>
where
    V: ToDateValue + ?Sized,
    L: ToDateValue + ?Sized,
{
    let value = value.to_date_value()?.timestamp();
    let limit = limit.to_date_value()?.timestamp();
    Ok(if inclusive {
        value >= limit
    } else {
        value > limit
    })
}

/// Whether `value` lies before `limit`, at one-second granularity.
pub fn is_before<V, L>(value: &V, limit: &L, inclusive: bool) -> Result<bool, AssertionError>
where
    V: ToDateValue + ?Sized,
    L: ToDateValue + ?Sized,
{
    let value = value.to_date_value()?.timestamp();
    let limit = limit.to_date_value()?.timestamp();
    Ok(if inclusive {
        value <= limit
    } else {
        value < limit
    })
}

/// Whether `value` lies between `min` and `max`.
///
/// Equivalent to `is_after(value, min, inclusive) && is_before(value, max, inclusive)`.
/// A `min` later than `max` is a caller error.
///
/// # Example
///
/// ```rust
/// use touchstone::datetime::is_between;
/// use touchstone::ErrorKind;
///
/// assert!(is_between("2014-01-01", "2013-01-01", "2015-01-01", false).unwrap());
/// assert!(!is_between("2014-01-01", "2013-12-01", "2013-12-30", true).unwrap());
///
/// let err = is_between("2014-01-01", "2015-01-01", "2013-01-01", true).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn is_between<V, L, U>(
    value: &V,
    min: &L,
    max: &U,
    inclusive: bool,
) -> Result<bool, AssertionError>
where
    V: ToDateValue + ?Sized,
    L: ToDateValue + ?Sized,
    U: ToDateValue + ?Sized,
{
    let value = value.to_date_value()?;
    let min = min.to_date_value()?;
    let max = max.to_date_value()?;

    if min.timestamp() > max.timestamp() {
        return Err(AssertionError::invalid_argument(format!(
            "{min} cannot be later than {max} for validation"
        )));
    }

    Ok(is_after(&value, &min, inclusive)? && is_before(&value, &max, inclusive)?)
}

fn falls_on<V: ToDateValue + ?Sized>(value: &V, day: Weekday) -> Result<bool, AssertionError> {
    Ok(value.to_date_value()?.weekday() == day)
}

/// Whether `value` falls on a Monday.
pub fn is_monday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    falls_on(value, Weekday::Mon)
}

/// Whether `value` falls on a Tuesday.
pub fn is_tuesday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    falls_on(value, Weekday::Tue)
}

/// Whether `value` falls on a Wednesday.
pub fn is_wednesday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    falls_on(value, Weekday::Wed)
}

/// Whether `value` falls on a Thursday.
pub fn is_thursday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    falls_on(value, Weekday::Thu)
}

/// Whether `value` falls on a Friday.
pub fn is_friday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    falls_on(value, Weekday::Fri)
}

/// Whether `value` falls on a Saturday.
pub fn is_saturday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    falls_on(value, Weekday::Sat)
}

/// Whether `value` falls on a Sunday.
pub fn is_sunday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    falls_on(value, Weekday::Sun)
}

/// Saturday or Sunday.
pub fn is_weekend<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    let day = value.to_date_value()?.weekday();
    Ok(matches!(day, Weekday::Sat | Weekday::Sun))
}

/// Monday to Friday.
pub fn is_weekday<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    is_weekend(value).map(|weekend| !weekend)
}

fn is_relative_day<V, C>(value: &V, clock: &C, shift: i8) -> Result<bool, AssertionError>
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    let date = value.to_date_value()?.date();
    let today = clock.now().date();
    let target: Option<NaiveDate> = match shift {
        0 => Some(today),
        s if s > 0 => today.checked_add_days(Days::new(1)),
        _ => today.checked_sub_days(Days::new(1)),
    };
    Ok(target == Some(date))
}

/// Whether `value` is on the clock's current calendar date.
///
/// Time of day is ignored.
pub fn is_today<V, C>(value: &V, clock: &C) -> Result<bool, AssertionError>
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    is_relative_day(value, clock, 0)
}

/// Whether `value` is on the day before the clock's current date.
pub fn is_yesterday<V, C>(value: &V, clock: &C) -> Result<bool, AssertionError>
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    is_relative_day(value, clock, -1)
}

/// Whether `value` is on the day after the clock's current date.
pub fn is_tomorrow<V, C>(value: &V, clock: &C) -> Result<bool, AssertionError>
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    is_relative_day(value, clock, 1)
}

/// Whether the year of `value` is a Gregorian leap year.
///
/// ```rust
/// use touchstone::datetime::is_leap_year;
///
/// assert!(is_leap_year("2000-06-01").unwrap());
/// assert!(!is_leap_year("1900-06-01").unwrap());
/// ```
pub fn is_leap_year<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    let year = value.to_date_value()?.year();
    Ok(NaiveDate::from_ymd_opt(year, 2, 29).is_some())
}

/// The four buckets a day is divided into.
///
/// | bucket    | from     | to (inclusive) |
/// |-----------|----------|----------------|
/// | night     | 00:00:00 | 05:59:59       |
/// | morning   | 06:00:00 | 11:59:59       |
/// | afternoon | 12:00:00 | 17:59:59       |
/// | evening   | 18:00:00 | 23:59:59       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// 00:00:00 to 05:59:59.
    Night,
    /// 06:00:00 to 11:59:59.
    Morning,
    /// 12:00:00 to 17:59:59.
    Afternoon,
    /// 18:00:00 to 23:59:59.
    Evening,
}

impl TimeOfDay {
    /// Bucket for a number of seconds since midnight.
    pub fn from_seconds(seconds: u32) -> Self {
        match seconds / 3600 {
            0..=5 => TimeOfDay::Night,
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    /// Bucket of a date's wall-clock time.
    pub fn of(value: &DateValue) -> Self {
        TimeOfDay::from_seconds(value.seconds_from_midnight())
    }
}

fn in_bucket<V: ToDateValue + ?Sized>(
    value: &V,
    bucket: TimeOfDay,
) -> Result<bool, AssertionError> {
    Ok(TimeOfDay::of(&value.to_date_value()?) == bucket)
}

/// 06:00:00 to 11:59:59.
pub fn is_morning<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    in_bucket(value, TimeOfDay::Morning)
}

/// 12:00:00 to 17:59:59.
pub fn is_afternoon<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    in_bucket(value, TimeOfDay::Afternoon)
}

/// 18:00:00 to 23:59:59.
pub fn is_evening<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    in_bucket(value, TimeOfDay::Evening)
}

/// 00:00:00 to 05:59:59.
pub fn is_night<V: ToDateValue + ?Sized>(value: &V) -> Result<bool, AssertionError> {
    in_bucket(value, TimeOfDay::Night)
}
