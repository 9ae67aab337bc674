//! Field-level validators for phone numbers and birthdays.
//!
//! These are pure predicates. The domain value objects call them on every
//! assignment and decide which error to raise.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Textual format of a stored birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{10}$").expect("phone pattern is valid"));

static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("birthday pattern is valid"));

/// Ten digits, optionally prefixed with `+`.
pub fn is_valid_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

/// A real calendar date written as `DD.MM.YYYY`.
pub fn is_valid_birthday(text: &str) -> bool {
    parse_birthday(text).is_some()
}

/// Parse a `DD.MM.YYYY` birthday into a calendar date.
///
/// Returns `None` when the shape is wrong (`1.2.2000`) or the date does not
/// exist (`31.02.2000`).
pub fn parse_birthday(text: &str) -> Option<NaiveDate> {
    if !BIRTHDAY_RE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).ok()
}
