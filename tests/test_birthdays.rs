//! Integration tests for the weekly birthday planner.

use chrono::{NaiveDate, Weekday};
use contact_book::{AddressBook, CelebrationDay, Record};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    entries
        .iter()
        .map(|(name, birthday)| {
            let mut record = Record::new(*name).unwrap();
            record.add_birthday(*birthday).unwrap();
            record
        })
        .collect()
}

/// Reference week from Wednesday 2024-06-05.
#[test]
fn test_reference_week() {
    let book = book_with_birthdays(&[
        ("Thursday Person", "06.06.1990"),
        ("Saturday Person", "08.06.1985"),
        ("Today Person", "05.06.2000"),
        ("Far Person", "20.06.1970"),
    ]);

    let upcoming = book.birthdays_per_week(date(2024, 6, 5));

    assert_eq!(
        upcoming.get("Thursday"),
        Some(&["Thursday Person".to_string()][..])
    );
    assert_eq!(
        upcoming.get("Monday"),
        Some(&["Saturday Person".to_string()][..])
    );
    assert_eq!(upcoming.get("Today"), Some(&["Today Person".to_string()][..]));
    assert!(upcoming
        .iter()
        .all(|group| !group.names.contains(&"Far Person".to_string())));
    assert_eq!(upcoming.len(), 3);
}

/// Several contacts on the same day are all kept.
#[test]
fn test_shared_day_keeps_everyone() {
    let book = book_with_birthdays(&[
        ("A", "07.06.1990"),
        ("B", "07.06.1991"),
        ("C", "07.06.1992"),
    ]);

    let upcoming = book.birthdays_per_week(date(2024, 6, 5));
    assert_eq!(
        upcoming.by_day(CelebrationDay::Weekday(Weekday::Fri)),
        Some(&["A".to_string(), "B".to_string(), "C".to_string()][..])
    );
}

/// Weekend birthdays join real Monday birthdays under one label.
#[test]
fn test_weekend_and_monday_share_group() {
    let book = book_with_birthdays(&[
        ("Sat", "08.06.1990"),
        ("Sun", "09.06.1990"),
        ("Mon", "10.06.1990"),
    ]);

    let upcoming = book.birthdays_per_week(date(2024, 6, 5));
    let monday = upcoming.iter().find(|g| g.day.label() == "Monday").unwrap();
    assert_eq!(monday.date, date(2024, 6, 10));
    assert_eq!(monday.names, vec!["Sat", "Sun", "Mon"]);
}

/// A weekend whose Monday is a full week away is left out.
#[test]
fn test_weekend_shift_outside_window_is_dropped() {
    // Tuesday 2024-06-04: Sunday 06-09 still shifts to 06-10 (day 6).
    let upcoming = book_with_birthdays(&[("Sun", "09.06.1990")])
        .birthdays_per_week(date(2024, 6, 4));
    assert_eq!(upcoming.get("Monday"), Some(&["Sun".to_string()][..]));

    // Monday 2024-06-03: the shift lands on day 7.
    let upcoming = book_with_birthdays(&[("Sun", "09.06.1990")])
        .birthdays_per_week(date(2024, 6, 3));
    assert!(upcoming.is_empty());
}

/// A birthday on a Monday `today` is greeted as "Today", not moved or relabelled.
#[test]
fn test_monday_birthday_on_monday_is_today() {
    // 2024-06-03 is a Monday.
    let monday = date(2024, 6, 3);
    let upcoming = book_with_birthdays(&[("Birthday Person", "03.06.1990"), ("Next", "04.06.1990")])
        .birthdays_per_week(monday);

    assert_eq!(
        upcoming.by_day(CelebrationDay::Today),
        Some(&["Birthday Person".to_string()][..])
    );
    assert_eq!(upcoming.get("Monday"), None);
    assert_eq!(upcoming.iter().next().map(|group| group.date), Some(monday));
    assert_eq!(upcoming.get("Tuesday"), Some(&["Next".to_string()][..]));
}

/// Contacts without a birthday never appear.
#[test]
fn test_records_without_birthday_are_skipped() {
    let mut book = AddressBook::new();
    let mut record = Record::new("NoBirthday").unwrap();
    record.add_phone("1111111111").unwrap();
    book.add_record(record);

    assert!(book.birthdays_per_week(date(2024, 6, 5)).is_empty());
}

/// The window rolls over into January.
#[test]
fn test_year_rollover() {
    let book = book_with_birthdays(&[("NewYear", "01.01.1999"), ("Past", "01.12.1999")]);

    // Saturday 2024-12-28: 2025-01-01 is a Wednesday.
    let upcoming = book.birthdays_per_week(date(2024, 12, 28));
    assert_eq!(upcoming.get("Wednesday"), Some(&["NewYear".to_string()][..]));
    assert_eq!(upcoming.len(), 1);
}

/// 29 February is celebrated on 28 February in common years.
#[test]
fn test_leap_day_birthday() {
    let book = book_with_birthdays(&[("Leap", "29.02.1996")]);

    // Monday 2025-02-24: 2025-02-28 is a Friday.
    let upcoming = book.birthdays_per_week(date(2025, 2, 24));
    let group = upcoming.iter().next().unwrap();
    assert_eq!(group.date, date(2025, 2, 28));
    assert_eq!(group.day, CelebrationDay::Weekday(Weekday::Fri));
}

/// Repeated queries over the same snapshot give the same answer.
#[test]
fn test_query_is_pure() {
    let book = book_with_birthdays(&[("A", "06.06.1990"), ("B", "08.06.1990")]);
    let today = date(2024, 6, 5);
    assert_eq!(book.birthdays_per_week(today), book.birthdays_per_week(today));
}
