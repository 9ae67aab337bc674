//! The address book: a keyed, insertion-ordered collection of records and
//! the weekly birthday planner that runs over it.

mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{BirthdayGroup, CelebrationDay, UpcomingBirthdays, BIRTHDAY_WINDOW_DAYS};
