//! Property-based tests for the rule families

use chrono::{DateTime, NaiveTime, Timelike};
use proptest::prelude::*;
use touchstone::assert::*;
use touchstone::datetime::{self, DateValue, TimeOfDay};
use touchstone::predicate::{has_length, len_between, Predicate};
use touchstone::upload::{SizeLimit, BYTE_UNITS};
use touchstone::Validation;

fn instant() -> impl Strategy<Value = DateValue> {
    // 1900-01-01 .. 2399-12-31
    (-2_208_988_800i64..13_569_465_599).prop_filter_map("in chrono range", |secs| {
        DateTime::from_timestamp(secs, 0).map(DateValue::from)
    })
}

proptest! {
    #[test]
    fn prop_has_length_counts_chars(value in "\\PC{0,24}") {
        let chars = value.chars().count();
        prop_assert!(has_length(chars).check(value.as_str()));
        prop_assert!(!has_length(chars + 1).check(value.as_str()));
        prop_assert_eq!(assert_has_length(&value, chars).is_ok(), true);
    }

    #[test]
    fn prop_multibyte_length_is_not_byte_length(n in 1usize..16) {
        let value = "é".repeat(n);
        prop_assert!(value.len() != n);
        prop_assert!(has_length(n).check(value.as_str()));
    }

    #[test]
    fn prop_len_between_matches_definition(
        value in "[a-zé ]{0,20}",
        a in 0usize..20,
        b in 0usize..20,
        inclusive in any::<bool>(),
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let len = value.chars().count();
        let expected = if inclusive {
            min <= len && len <= max
        } else {
            min < len && len < max
        };
        prop_assert_eq!(len_between(min, max, inclusive).check(value.as_str()), expected);
        prop_assert_eq!(string::assert_is_between(&value, min, max, inclusive).is_ok(), expected);
    }

    #[test]
    fn prop_before_after_ordering(a in instant(), delta in 1i64..1_000_000_000) {
        let b = DateValue::from(a.instant() + chrono::Duration::seconds(delta));

        prop_assert!(datetime::is_before(&a, &b, false).unwrap());
        prop_assert!(!datetime::is_before(&b, &a, false).unwrap());
        prop_assert!(datetime::is_before(&a, &a, true).unwrap());
        prop_assert!(!datetime::is_before(&a, &a, false).unwrap());

        prop_assert!(datetime::is_after(&b, &a, false).unwrap());
        prop_assert!(!datetime::is_after(&a, &b, false).unwrap());
        prop_assert!(datetime::is_after(&a, &a, true).unwrap());
    }

    #[test]
    fn prop_between_is_after_and_before(
        v in instant(),
        x in instant(),
        y in instant(),
        inclusive in any::<bool>(),
    ) {
        let (min, max) = if x <= y { (x, y) } else { (y, x) };
        let expected = datetime::is_after(&v, &min, inclusive).unwrap()
            && datetime::is_before(&v, &max, inclusive).unwrap();
        prop_assert_eq!(datetime::is_between(&v, &min, &max, inclusive).unwrap(), expected);
    }

    #[test]
    fn prop_between_with_inverted_bounds_is_rejected(v in instant(), x in instant(), gap in 1i64..86_400) {
        let later = DateValue::from(x.instant() + chrono::Duration::seconds(gap));
        prop_assert!(datetime::is_between(&v, &later, &x, true).is_err());
    }

    #[test]
    fn prop_canonical_format_round_trips(v in instant()) {
        let text = v.to_string();
        prop_assert_eq!(DateValue::parse(&text).unwrap(), v);
    }

    #[test]
    fn prop_size_limits_scale_by_unit(value in 1u64..10_000, unit in 0usize..BYTE_UNITS.len()) {
        let (symbol, multiplier) = BYTE_UNITS[unit];
        let limit: SizeLimit = format!("{value}{}", symbol.to_lowercase()).parse().unwrap();
        prop_assert_eq!(limit.ceiling(), Some(value * multiplier));
    }

    #[test]
    fn prop_validation_keeps_every_failure(values in prop::collection::vec("[a-z]{1,8}|[A-Z ]{1,8}", 1..20)) {
        let expected = values.iter().filter(|v| assert_is_slug(v).is_err()).count();
        let result = Validation::all(values.iter().map(|v| assert_is_slug(v).map(|_| v.clone())));
        match result.into_result() {
            Ok(passed) => {
                prop_assert_eq!(expected, 0);
                prop_assert_eq!(passed, values);
            }
            Err(failures) => {
                prop_assert_eq!(failures.len(), expected);
                prop_assert!(failures.iter().all(|f| f.rule() == Some("is_slug")));
            }
        }
    }
}

#[test]
fn test_time_buckets_partition_the_day() {
    for seconds in 0..86_400u32 {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap();
        let value = DateValue::parse(&format!("2020-06-15 {}", time.format("%H:%M:%S"))).unwrap();
        assert_eq!(value.time().num_seconds_from_midnight(), seconds);

        let hits = [
            assert_is_morning(&value).is_ok(),
            assert_is_afternoon(&value).is_ok(),
            assert_is_evening(&value).is_ok(),
            assert_is_night(&value).is_ok(),
        ];
        assert_eq!(hits.iter().filter(|&&hit| hit).count(), 1, "{time}");
        assert_eq!(TimeOfDay::from_seconds(seconds), TimeOfDay::of(&value));
    }
}
