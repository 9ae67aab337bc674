//! Contact book persistence.
//!
//! The whole book is written to, and read from, a single JSON file. Saving
//! writes a sibling temporary file first and renames it over the target, so
//! the file on disk always holds either the old or the new book in full.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// Envelope written to disk.
#[derive(Serialize)]
struct BookFileRef<'a> {
    version: u32,
    contacts: &'a AddressBook,
}

/// Envelope read from disk.
#[derive(Deserialize)]
struct BookFile {
    version: u32,
    #[serde(default)]
    contacts: serde_json::Value,
}

/// Loads and saves an [`AddressBook`] at a fixed path.
#[derive(Debug, Clone)]
pub struct BookStorage {
    path: PathBuf,
}

impl BookStorage {
    /// Create storage backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this storage reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book from disk.
    ///
    /// A missing file yields an empty book.
    pub fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No contact book file, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let book = parse_book(&content)?;

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded contact book"
        );
        Ok(book)
    }

    /// Write the whole book to disk, replacing the previous file.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(&BookFileRef {
            version: FORMAT_VERSION,
            contacts: book,
        })?;

        let tmp_path = self.tmp_path();
        debug!(path = %tmp_path.display(), bytes = json.len(), "Writing temporary book file");
        fs::write(&tmp_path, json).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!(
                    path = %tmp_path.display(),
                    error = %cleanup,
                    "Failed to remove temporary book file"
                );
            }
            return Err(self.io_error(e));
        }

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved contact book"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("contacts"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

/// Decode a book file, checking the format version first.
fn parse_book(content: &str) -> StorageResult<AddressBook> {
    let file: BookFile = serde_json::from_str(content)?;
    if file.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion(file.version));
    }
    if file.contacts.is_null() {
        return Ok(AddressBook::new());
    }
    Ok(serde_json::from_value(file.contacts)?)
}
