//! Strict calendar-date parsing and day-span arithmetic.
//!
//! The catalog's date fields are expected in the ISO `YYYY-MM-DD` shape but
//! must be validated, not trusted. `chrono`'s `%Y-%m-%d` parser alone is too
//! permissive for that (it accepts `2023-1-1`), so [`parse_date`] checks the
//! exact digit layout first and only then lets chrono validate the calendar
//! values (month range, day-of-month, leap years).
//!
//! Parse failure is carried as `None`, never as a sentinel date: `1970-01-01`
//! is a perfectly valid input and must parse like any other day.

use chrono::NaiveDate;

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Returns `None` for anything that is not exactly 4 digits, `-`, 2 digits,
/// `-`, 2 digits, or that names an impossible calendar day.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if !has_iso_date_shape(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Exact `dddd-dd-dd` layout check over ASCII bytes.
fn has_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Whole-day span from `start` to `end`, counting both endpoints.
///
/// Equal dates yield 1. Callers must have checked `start <= end`; an inverted
/// range would yield a non-positive count that no valid support period has.
#[must_use]
pub fn span_days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}
