//! Domain value objects and types.
//!
//! This module contains the validated field values a contact is built from:
//! its name, phone numbers and birthday. Each value object validates on
//! construction and on every replacement, so an invalid value can never be
//! represented in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
