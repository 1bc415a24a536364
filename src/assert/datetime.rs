//! Date and time assertions
//!
//! Inputs are parsed before the rule runs. A value that does not parse fails
//! with [`AssertionError::InvalidDate`], never with a plain rule failure.

use super::{ensure, logged};
use crate::datetime::{self, Clock, DateValue, ToDateValue};
use crate::error::{AssertResult, AssertionError};

/// Default message of [`assert_is_morning`].
pub const IS_MORNING: &str = "Time provided is not morning.";
/// Default message of [`assert_is_afternoon`].
pub const IS_AFTERNOON: &str = "Time provided is not afternoon.";
/// Default message of [`assert_is_evening`].
pub const IS_EVENING: &str = "Time provided is not evening.";
/// Default message of [`assert_is_night`].
pub const IS_NIGHT: &str = "Time provided is not night.";
/// Default message of [`assert_is_weekend`].
pub const IS_WEEKEND: &str = "Day provided is not a weekend day.";
/// Default message of [`assert_is_weekday`].
pub const IS_WEEKDAY: &str = "Day provided is not a weekday.";
/// Default message of [`assert_is_monday`].
pub const IS_MONDAY: &str = "Day provided is not Monday.";
/// Default message of [`assert_is_tuesday`].
pub const IS_TUESDAY: &str = "Day provided is not Tuesday.";
/// Default message of [`assert_is_wednesday`].
pub const IS_WEDNESDAY: &str = "Day provided is not Wednesday.";
/// Default message of [`assert_is_thursday`].
pub const IS_THURSDAY: &str = "Day provided is not Thursday.";
/// Default message of [`assert_is_friday`].
pub const IS_FRIDAY: &str = "Day provided is not Friday.";
/// Default message of [`assert_is_saturday`].
pub const IS_SATURDAY: &str = "Day provided is not Saturday.";
/// Default message of [`assert_is_sunday`].
pub const IS_SUNDAY: &str = "Day provided is not Sunday.";
/// Default message of [`assert_is_today`].
pub const IS_TODAY: &str = "Day provided is not today.";
/// Default message of [`assert_is_yesterday`].
pub const IS_YESTERDAY: &str = "Day provided is not yesterday.";
/// Default message of [`assert_is_tomorrow`].
pub const IS_TOMORROW: &str = "Day provided is not tomorrow.";
/// Default message of [`assert_is_leap_year`].
pub const IS_LEAP_YEAR: &str = "Year provided is not a leap year.";

type DateRule = fn(&DateValue) -> Result<bool, AssertionError>;

fn check<V: ToDateValue + ?Sized>(
    value: &V,
    rule: DateRule,
    name: &'static str,
    message: &str,
) -> AssertResult {
    let value = value.to_date_value().map_err(logged)?;
    ensure(rule(&value).map_err(logged)?, name, message, value)
}

/// The value parses as a date.
///
/// # Errors
///
/// [`AssertionError::InvalidDate`] naming the rejected input.
pub fn assert_is_date_time<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    super::traced(value.to_date_value().map(|_| ()))
}

/// `value` is after `limit`.
///
/// ```rust
/// use touchstone::assert::assert_is_after;
///
/// assert!(assert_is_after("2014-01-02", "2014-01-01", false).is_ok());
/// assert_eq!(
///     assert_is_after("2014-01-01", "2014-01-01", false).unwrap_err().to_string(),
///     "Date provided must be after 2014-01-01 00:00:00."
/// );
/// ```
pub fn assert_is_after<V, L>(value: &V, limit: &L, inclusive: bool) -> AssertResult
where
    V: ToDateValue + ?Sized,
    L: ToDateValue + ?Sized,
{
    let value = value.to_date_value().map_err(logged)?;
    let limit = limit.to_date_value().map_err(logged)?;
    ensure(
        datetime::is_after(&value, &limit, inclusive).map_err(logged)?,
        "is_after",
        format!("Date provided must be after {limit}."),
        value,
    )
}

/// `value` is before `limit`.
pub fn assert_is_before<V, L>(value: &V, limit: &L, inclusive: bool) -> AssertResult
where
    V: ToDateValue + ?Sized,
    L: ToDateValue + ?Sized,
{
    let value = value.to_date_value().map_err(logged)?;
    let limit = limit.to_date_value().map_err(logged)?;
    ensure(
        datetime::is_before(&value, &limit, inclusive).map_err(logged)?,
        "is_before",
        format!("Date provided must be before {limit}."),
        value,
    )
}

/// `value` is between `min` and `max`.
///
/// # Errors
///
/// `InvalidArgument` when `min` is later than `max`.
pub fn assert_is_between<V, L, U>(value: &V, min: &L, max: &U, inclusive: bool) -> AssertResult
where
    V: ToDateValue + ?Sized,
    L: ToDateValue + ?Sized,
    U: ToDateValue + ?Sized,
{
    let value = value.to_date_value().map_err(logged)?;
    let min = min.to_date_value().map_err(logged)?;
    let max = max.to_date_value().map_err(logged)?;
    ensure(
        datetime::is_between(&value, &min, &max, inclusive).map_err(logged)?,
        "is_between",
        format!("Date provided must be between {min} and {max}."),
        value,
    )
}

/// Saturday or Sunday.
pub fn assert_is_weekend<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_weekend::<DateValue>, "is_weekend", IS_WEEKEND)
}

/// Monday to Friday.
pub fn assert_is_weekday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_weekday::<DateValue>, "is_weekday", IS_WEEKDAY)
}

/// A Monday.
pub fn assert_is_monday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_monday::<DateValue>, "is_monday", IS_MONDAY)
}

/// A Tuesday.
pub fn assert_is_tuesday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_tuesday::<DateValue>, "is_tuesday", IS_TUESDAY)
}

/// A Wednesday.
pub fn assert_is_wednesday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_wednesday::<DateValue>, "is_wednesday", IS_WEDNESDAY)
}

/// A Thursday.
pub fn assert_is_thursday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_thursday::<DateValue>, "is_thursday", IS_THURSDAY)
}

/// A Friday.
pub fn assert_is_friday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_friday::<DateValue>, "is_friday", IS_FRIDAY)
}

/// A Saturday.
pub fn assert_is_saturday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_saturday::<DateValue>, "is_saturday", IS_SATURDAY)
}

/// A Sunday.
pub fn assert_is_sunday<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_sunday::<DateValue>, "is_sunday", IS_SUNDAY)
}

fn check_relative<V, C>(
    value: &V,
    clock: &C,
    rule: fn(&DateValue, &C) -> Result<bool, AssertionError>,
    name: &'static str,
    message: &str,
) -> AssertResult
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    let value = value.to_date_value().map_err(logged)?;
    ensure(rule(&value, clock).map_err(logged)?, name, message, value)
}

/// Same calendar date as `clock.now()`.
///
/// ```rust
/// use touchstone::assert::assert_is_today;
/// use touchstone::datetime::SystemClock;
///
/// let now = chrono::Local::now();
/// assert!(assert_is_today(&now, &SystemClock).is_ok());
/// ```
pub fn assert_is_today<V, C>(value: &V, clock: &C) -> AssertResult
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    check_relative(value, clock, datetime::is_today::<DateValue, C>, "is_today", IS_TODAY)
}

/// The calendar date before `clock.now()`.
pub fn assert_is_yesterday<V, C>(value: &V, clock: &C) -> AssertResult
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    check_relative(
        value,
        clock,
        datetime::is_yesterday::<DateValue, C>,
        "is_yesterday",
        IS_YESTERDAY,
    )
}

/// The calendar date after `clock.now()`.
pub fn assert_is_tomorrow<V, C>(value: &V, clock: &C) -> AssertResult
where
    V: ToDateValue + ?Sized,
    C: Clock + ?Sized,
{
    check_relative(
        value,
        clock,
        datetime::is_tomorrow::<DateValue, C>,
        "is_tomorrow",
        IS_TOMORROW,
    )
}

/// The value's year is a leap year.
pub fn assert_is_leap_year<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_leap_year::<DateValue>, "is_leap_year", IS_LEAP_YEAR)
}

/// Between 06:00:00 and 11:59:59.
pub fn assert_is_morning<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_morning::<DateValue>, "is_morning", IS_MORNING)
}

/// Between 12:00:00 and 17:59:59.
pub fn assert_is_afternoon<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_afternoon::<DateValue>, "is_afternoon", IS_AFTERNOON)
}

/// Between 18:00:00 and 23:59:59.
pub fn assert_is_evening<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_evening::<DateValue>, "is_evening", IS_EVENING)
}

/// Between 00:00:00 and 05:59:59.
pub fn assert_is_night<V: ToDateValue + ?Sized>(value: &V) -> AssertResult {
    check(value, datetime::is_night::<DateValue>, "is_night", IS_NIGHT)
}
