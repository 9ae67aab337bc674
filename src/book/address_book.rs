//! Address book storage and CRUD operations.

use crate::error::{ContactError, ContactResult};
use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A collection of contact records keyed by contact name.
///
/// Each entry's key always equals the stored record's name. Records are
/// enumerated in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced wholesale and
    /// returned; callers that want to keep it should check [`contains`]
    /// first.
    ///
    /// [`contains`]: AddressBook::contains
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record)
    }

    /// Look up the record stored under `name`.
    pub fn find(&self, name: &str) -> ContactResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| ContactError::ContactDoesNotExist(name.to_string()))
    }

    /// Look up the record stored under `name` for modification.
    pub fn find_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| ContactError::ContactDoesNotExist(name.to_string()))
    }

    /// Remove and return the record stored under `name`.
    ///
    /// The remaining records keep their relative order.
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| ContactError::ContactDoesNotExist(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Record> {
        self.records.values()
    }

    /// Iterate over all contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

// Serde support - serialize as an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - keys are rebuilt from record names
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
