//! Command handlers.
//!
//! Each handler receives already-tokenized arguments, checks how many it got,
//! runs the matching address book operation and phrases the result for the
//! user. Failures are returned as [`ContactError`] and turned into text by
//! [`describe_error`].

use crate::book::{AddressBook, CelebrationDay, UpcomingBirthdays};
use crate::error::{ContactError, ContactResult};
use crate::models::Record;
use chrono::NaiveDate;

/// Fail with `InvalidArgumentCount` unless exactly `expected` arguments were given.
fn expect_args(args: &[String], expected: usize) -> ContactResult<()> {
    if args.len() != expected {
        return Err(ContactError::InvalidArgumentCount {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

pub fn hello(book: &AddressBook) -> String {
    format!(
        "Hello! You have {} contacts in your address book. How can I help you?",
        book.len()
    )
}

/// `add <name> <phone>`
pub fn add_contact(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    if book.contains(name) {
        return Ok(format!("Contact {} already exists.", name));
    }

    let mut record = Record::new(name.as_str())?;
    record.add_phone(phone.as_str())?;
    book.add_record(record);
    Ok(format!("Contact {} added.", name))
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    expect_args(args, 3)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    let record = book.find_mut(name)?;
    if record.edit_phone(old, new.as_str())? {
        Ok(format!("Contact {} changed.", name))
    } else {
        Ok(format!("Contact {} does not have phone {}.", name, old))
    }
}

/// `phone <name>`
pub fn get_contact_phone(args: &[String], book: &AddressBook) -> ContactResult<String> {
    expect_args(args, 1)?;
    let name = &args[0];

    let record = book.find(name)?;
    if record.phones().is_empty() {
        return Ok(format!("Contact {} has no phones.", name));
    }
    let phones: Vec<&str> = record.phone_numbers().collect();
    Ok(format!("Phone: {}", phones.join(", ")))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    let record = book.find_mut(name)?;
    if record.remove_phone(phone) > 0 {
        Ok(format!("Phone {} removed from {}.", phone, name))
    } else {
        Ok(format!("Contact {} does not have phone {}.", name, phone))
    }
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    expect_args(args, 1)?;
    let name = &args[0];

    book.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}

/// `all`
pub fn get_all_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "You don't have any contacts.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    expect_args(args, 2)?;
    let (name, birthday) = (&args[0], &args[1]);

    book.find_mut(name)?.add_birthday(birthday.as_str())?;
    Ok(format!("Birthday for {} added.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> ContactResult<String> {
    expect_args(args, 1)?;
    let name = &args[0];

    match book.find(name)?.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("{} does not have a birthday saved.", name)),
    }
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    render_birthdays(&book.birthdays_per_week(today))
}

/// Format a weekly birthday report, today's greetings first.
pub fn render_birthdays(upcoming: &UpcomingBirthdays) -> String {
    if upcoming.is_empty() {
        return "No birthdays in the upcoming week.".to_string();
    }

    let mut lines = Vec::new();
    if let Some(names) = upcoming.by_day(CelebrationDay::Today) {
        lines.push("Birthdays today:".to_string());
        lines.push(format!("Today: {} 🎉", names.join(", ")));
    }

    let mut rest = upcoming
        .iter()
        .filter(|group| group.day != CelebrationDay::Today)
        .peekable();
    if rest.peek().is_some() {
        lines.push("Birthdays in the upcoming week:".to_string());
        for group in rest {
            lines.push(format!("{}: {}", group.day, group.names.join(", ")));
        }
    }

    lines.join("\n")
}

/// User-facing text for a failed command.
pub fn describe_error(err: &ContactError) -> String {
    match err {
        ContactError::InvalidArgumentCount { .. } => "Invalid number of arguments.".to_string(),
        ContactError::InvalidPhone(_) => {
            "Invalid phone number. Phone number must contain 10 digits, with or without '+' sign."
                .to_string()
        }
        ContactError::InvalidBirthdayFormat(_) => {
            "Invalid birthday format. Please use DD.MM.YYYY format.".to_string()
        }
        ContactError::EmptyName => "Contact name cannot be empty.".to_string(),
        ContactError::ContactDoesNotExist(name) => format!("Contact {} doesn't exist.", name),
    }
}
