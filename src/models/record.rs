//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phone numbers and an optional birthday.
///
/// Phone numbers may repeat. The name is fixed at creation because the
/// address book stores the record under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name of the contact
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<Phone>,

    /// Birth date, if known
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// All phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Phone numbers as plain strings.
    pub fn phone_numbers(&self) -> impl Iterator<Item = &str> {
        self.phones.iter().map(Phone::as_str)
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` when no phone matches. `new` is validated before
    /// anything is modified.
    pub fn edit_phone(
        &mut self,
        old: &str,
        new: impl Into<String>,
    ) -> Result<bool, ValidationError> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                *phone = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Whether the record holds `phone` at least once.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.find_phone(phone).is_some()
    }

    /// Remove every copy of `phone` and return how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Set the birthday, discarding any previous one.
    pub fn add_birthday(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        if self.phones.is_empty() {
            write!(f, "No phones available")?;
        } else {
            let phones: Vec<&str> = self.phone_numbers().collect();
            write!(f, "{}", phones.join("; "))?;
        }
        match &self.birthday {
            Some(birthday) => write!(f, ", birthday: {}", birthday),
            None => write!(f, ", birthday: No birthday available"),
        }
    }
}
