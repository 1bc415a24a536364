//! Signup form example - every field checked, every failure reported
//!
//! Run with: cargo run --example signup_form

use touchstone::assert::{self, *};
use touchstone::datetime::FixedClock;
use touchstone::prelude::*;

#[derive(Debug)]
struct Signup {
    handle: String,
    email: String,
    password: String,
    birthday: String,
    start_date: String,
}

#[derive(Debug)]
struct Account {
    handle: String,
    email: String,
    birthday: DateValue,
}

fn validate_handle(handle: &str) -> Validation<String> {
    Validation::success(handle.to_string())
        .check(assert_not_empty(handle))
        .check(assert_is_slug(handle))
        .check(assert::string::assert_is_between(handle, 3, 20, true))
}

fn validate_email(email: &str) -> Validation<String> {
    Validation::from_result(
        assert_is_email(email)
            .with_message("Please enter a valid email address.")
            .map(|_| email.to_lowercase()),
    )
}

fn validate_password(password: &str) -> Validation<()> {
    Validation::success(())
        .check(assert::string::assert_is_between(password, 10, 128, true))
        .check(assert_has_uppercase(password, None))
        .check(assert_has_lowercase(password, None))
        .check(assert_has_numeric(password, Some(2)))
        .check(assert_has_special_characters(password, None))
}

fn validate_birthday(birthday: &str, clock: &impl Clock) -> Validation<DateValue> {
    Validation::from_result(birthday.to_date_value())
        .check_with(|date| assert_is_before(date, &clock.now(), false))
        .check_with(|date| assert_is_after(date, "1900-01-01", true))
}

fn validate_start_date(start: &str) -> Validation<()> {
    Validation::from_result(assert_is_weekday(start))
        .check_with(|_| assert_is_morning(start).with_message("Shifts start before noon."))
}

fn register(form: &Signup, clock: &impl Clock) -> Validation<Account> {
    (
        validate_handle(&form.handle),
        validate_email(&form.email),
        validate_password(&form.password),
        validate_birthday(&form.birthday, clock),
        validate_start_date(&form.start_date),
    )
        .validate_all()
        .map(|(handle, email, (), birthday, ())| Account {
            handle,
            email,
            birthday,
        })
}

fn report(form: &Signup, clock: &impl Clock) {
    println!("{form:?}");
    match register(form, clock) {
        Validation::Success(account) => println!("  accepted: {account:?}"),
        Validation::Failure(failures) => {
            println!("  rejected with {} problem(s):", failures.len());
            for failure in failures.iter() {
                match failure.rule() {
                    Some(rule) => println!("    - [{rule}] {failure}"),
                    None => println!("    - {failure}"),
                }
            }
        }
    }
    println!();
}

fn main() {
    let clock = match FixedClock::parse("2024-06-03 09:00:00") {
        Ok(clock) => clock,
        Err(e) => {
            eprintln!("bad clock: {e}");
            return;
        }
    };

    println!("=== Valid signup ===");
    report(
        &Signup {
            handle: "ada-lovelace".into(),
            email: "Ada@Example.org".into(),
            password: "Analytical-Engine-1843".into(),
            birthday: "1990-12-10".into(),
            start_date: "2024-06-10 08:30".into(),
        },
        &clock,
    );

    println!("=== Everything wrong ===");
    report(
        &Signup {
            handle: "Ada Lovelace".into(),
            email: "ada@localhost".into(),
            password: "password".into(),
            birthday: "2030-01-01".into(),
            start_date: "2024-06-08 14:00".into(),
        },
        &clock,
    );

    println!("=== Unreadable date ===");
    report(
        &Signup {
            handle: "babbage".into(),
            email: "charles@example.org".into(),
            password: "Difference-Engine-22".into(),
            birthday: "the tenth of december".into(),
            start_date: "2024-06-11 07:00".into(),
        },
        &clock,
    );
}
