//! Weekly birthday planner.
//!
//! Given a reference date, works out which contacts have a birthday in the
//! next seven days and on which day the greeting should go out. Birthdays
//! that land on a weekend are moved to the following Monday, as long as that
//! Monday is still inside the window.

use super::AddressBook;
use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fmt;

/// Length of the look-ahead window, counted from (and including) today.
pub const BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// The label a birthday is announced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelebrationDay {
    /// The greeting is due on the reference date itself.
    Today,
    /// The greeting is due on the given weekday within the window.
    Weekday(Weekday),
}

impl CelebrationDay {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Weekday(day) => weekday_name(*day),
        }
    }
}

impl fmt::Display for CelebrationDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full English name of a weekday.
fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Contacts greeted on the same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayGroup {
    pub day: CelebrationDay,
    /// Calendar date the greeting is due.
    pub date: NaiveDate,
    /// Contact names, in address book order.
    pub names: Vec<String>,
}

/// Result of a weekly birthday query, ordered by greeting date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    groups: Vec<BirthdayGroup>,
}

impl UpcomingBirthdays {
    /// Names greeted under `label` (e.g. `"Today"` or `"Monday"`).
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|group| group.day.label() == label)
            .map(|group| group.names.as_slice())
    }

    /// Names greeted under `day`.
    pub fn by_day(&self, day: CelebrationDay) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|group| group.day == day)
            .map(|group| group.names.as_slice())
    }

    /// Number of distinct greeting days.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BirthdayGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a UpcomingBirthdays {
    type Item = &'a BirthdayGroup;
    type IntoIter = std::slice::Iter<'a, BirthdayGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Work out when `birthday` should be celebrated relative to `today`.
///
/// Returns the greeting date and its label, or `None` if the birthday (or
/// the Monday it is moved to) falls outside the window.
pub fn celebration_for(
    birthday: &Birthday,
    today: NaiveDate,
) -> Option<(NaiveDate, CelebrationDay)> {
    let window_end = today.checked_add_days(Days::new(BIRTHDAY_WINDOW_DAYS))?;
    let occurrence = birthday.next_occurrence(today)?;
    if occurrence >= window_end {
        return None;
    }

    match occurrence.weekday() {
        weekday @ (Weekday::Sat | Weekday::Sun) => {
            let to_monday = 7 - u64::from(weekday.num_days_from_monday());
            let monday = occurrence.checked_add_days(Days::new(to_monday))?;
            (monday < window_end).then_some((monday, CelebrationDay::Weekday(Weekday::Mon)))
        }
        weekday if weekday == today.weekday() => Some((occurrence, CelebrationDay::Today)),
        weekday => Some((occurrence, CelebrationDay::Weekday(weekday))),
    }
}

/// Group the birthdays among `records` that are due in the window starting at `today`.
pub fn birthdays_per_week<'a, I>(records: I, today: NaiveDate) -> UpcomingBirthdays
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut by_date: BTreeMap<NaiveDate, BirthdayGroup> = BTreeMap::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some((date, day)) = celebration_for(birthday, today) else {
            continue;
        };
        by_date
            .entry(date)
            .or_insert_with(|| BirthdayGroup {
                day,
                date,
                names: Vec::new(),
            })
            .names
            .push(record.name().as_str().to_string());
    }

    UpcomingBirthdays {
        groups: by_date.into_values().collect(),
    }
}

impl AddressBook {
    /// Birthdays due in the seven days starting at `today`.
    pub fn birthdays_per_week(&self, today: NaiveDate) -> UpcomingBirthdays {
        birthdays_per_week(self.iter(), today)
    }

    /// Birthdays due in the seven days starting at the local calendar date.
    pub fn upcoming_birthdays(&self) -> UpcomingBirthdays {
        self.birthdays_per_week(Local::now().date_naive())
    }
}
