//! Contact Book - a personal address book with a weekly birthday planner.
//!
//! The library keeps named contacts with phone numbers and an optional
//! birthday, answers lookups and edits by name, and works out which
//! birthdays fall in the coming week and on which day to send greetings.
//!
//! # Architecture
//!
//! - **validation**: Pass/fail checks for phone numbers and birthdays
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The address book and the weekly birthday planner
//! - **storage**: Saving and loading the book as a single JSON file
//! - **commands**: Text command parsing and user-facing replies
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;
pub mod validation;

pub use book::{AddressBook, BirthdayGroup, CelebrationDay, UpcomingBirthdays};
pub use commands::{execute, run_session, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, ContactError, StorageError};
pub use models::Record;
pub use storage::BookStorage;
