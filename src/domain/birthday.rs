//! Birthday value object.

use super::errors::ValidationError;
use crate::validation::parse_birthday;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated birth date, written as `DD.MM.YYYY`.
///
/// The original text is kept verbatim so that saving and reloading the book
/// reproduces it exactly; the parsed calendar date is kept alongside it.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("08.06.1994").unwrap();
/// assert_eq!(birthday.as_str(), "08.06.1994");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless `text` is a real
    /// calendar date in `DD.MM.YYYY` form.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        match parse_birthday(&text) {
            Some(date) => Ok(Self { text, date }),
            None => Err(ValidationError::InvalidBirthday(text)),
        }
    }

    /// Replace the birthday with `text`, keeping the current value on failure.
    pub fn set(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(text)?;
        Ok(())
    }

    /// Get the birthday text as it was entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The full birth date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years. Returns
    /// `None` only when `year` is outside the supported calendar range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.date.month(), self.date.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// The first anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("05.06.1990").unwrap();
        assert_eq!(birthday.as_str(), "05.06.1990");
        assert_eq!(birthday.date(), date(1990, 6, 5));
        assert_eq!(birthday.to_string(), "05.06.1990");
    }

    #[test]
    fn test_birthday_rejects_invalid() {
        assert_eq!(
            Birthday::new("1990-06-05"),
            Err(ValidationError::InvalidBirthday("1990-06-05".to_string()))
        );
        assert!(Birthday::new("30.02.1990").is_err());
    }

    #[test]
    fn test_birthday_failed_set_keeps_previous_value() {
        let mut birthday = Birthday::new("05.06.1990").unwrap();
        assert!(birthday.set("tomorrow").is_err());
        assert_eq!(birthday.as_str(), "05.06.1990");

        birthday.set("07.07.1977").unwrap();
        assert_eq!(birthday.date(), date(1977, 7, 7));
    }

    #[test]
    fn test_occurrence_ignores_birth_year() {
        let birthday = Birthday::new("20.06.1985").unwrap();
        assert_eq!(birthday.occurrence_in(2024), Some(date(2024, 6, 20)));
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.occurrence_in(2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday.occurrence_in(2024), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_next_occurrence_rolls_into_next_year() {
        let birthday = Birthday::new("03.01.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 12, 30)),
            Some(date(2025, 1, 3))
        );
        assert_eq!(
            birthday.next_occurrence(date(2024, 1, 3)),
            Some(date(2024, 1, 3))
        );
    }

    #[test]
    fn test_birthday_serialization_keeps_text() {
        let birthday = Birthday::new("01.01.2001").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01.01.2001\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
