//! Contact directory service
//!
//! Validation gate in front of the ordered store, plus the flat-file
//! import/export paths.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Contact, ContactValidator, Directory, DomainError};

/// Per-line outcome summary of a bulk load.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Records that passed validation and were inserted
    pub imported: usize,
    /// 1-based line number and rejection reason of every refused record
    pub rejected: Vec<(usize, DomainError)>,
}

/// Service owning the directory and its validation gate.
///
/// All mutations go through `add`/`update`, so no unvalidated phone or email
/// ever reaches the store. Bulk loading applies the same gate per line.
pub struct ContactService {
    directory: Directory,
    validator: ContactValidator,
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactService {
    /// Create a service with an empty directory.
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
            validator: ContactValidator::new(),
        }
    }

    /// Validate and insert a new contact.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> ApplicationResult<()> {
        self.validator.validate(phone, email)?;
        self.directory.insert(Contact::new(name, phone, email));
        Ok(())
    }

    /// Validate and overwrite the payload of an existing contact.
    ///
    /// Both fields are checked before anything is written, so a rejected
    /// update leaves the contact untouched.
    pub fn update(&mut self, name: &str, phone: &str, email: &str) -> ApplicationResult<()> {
        self.validator.validate(phone, email)?;
        if self.directory.update(name, phone, email) {
            Ok(())
        } else {
            Err(DomainError::NotFound {
                name: name.to_string(),
            }
            .into())
        }
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> ApplicationResult<&Contact> {
        self.directory.find(name).ok_or_else(|| {
            DomainError::NotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Remove a contact by exact name, returning the detached record.
    pub fn remove(&mut self, name: &str) -> ApplicationResult<Contact> {
        self.directory.remove(name).ok_or_else(|| {
            DomainError::NotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// In-order pass over all contacts, ascending by name.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.directory.iter()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Drop every contact; the service stays usable afterwards.
    pub fn clear(&mut self) {
        self.directory.clear();
    }

    /// Read access to the underlying store, for shape display.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Write every contact as a `name,phone,email` line, ascending by name.
    ///
    /// Returns the number of lines written. The format has no escaping; see
    /// [`Contact::parse_line`] for the consequences.
    pub fn export(&self, path: &Path) -> ApplicationResult<usize> {
        let mut out = String::new();
        for contact in self.directory.iter() {
            out.push_str(&contact.to_line());
            out.push('\n');
        }
        fs::write(path, out).map_err(|source| ApplicationError::ExportFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("export: wrote {} contacts to {}", self.len(), path.display());
        Ok(self.len())
    }

    /// Read `path` line by line through the same validation gate as
    /// interactive entry.
    pub fn import(&mut self, path: &Path) -> ApplicationResult<ImportOutcome> {
        let content = fs::read_to_string(path).map_err(|source| ApplicationError::ImportFile {
            path: path.to_path_buf(),
            source,
        })?;
        let outcome = self.bulk_load(content.lines());
        debug!(
            "import: {} imported, {} rejected from {}",
            outcome.imported,
            outcome.rejected.len(),
            path.display()
        );
        Ok(outcome)
    }

    /// Insert each record line in sequence order.
    ///
    /// Lines with fewer than two commas are not records and are skipped
    /// silently. Records that fail validation are collected per line and do
    /// not stop the rest of the batch.
    pub fn bulk_load<'a, I>(&mut self, lines: I) -> ImportOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut outcome = ImportOutcome::default();
        for (number, line) in lines.into_iter().enumerate() {
            let Some(contact) = Contact::parse_line(line) else {
                debug!("bulk_load: skipping malformed line {}", number + 1);
                continue;
            };
            match self.validator.validate(&contact.phone, &contact.email) {
                Ok(()) => {
                    self.directory.insert(contact);
                    outcome.imported += 1;
                }
                Err(reason) => outcome.rejected.push((number + 1, reason)),
            }
        }
        outcome
    }
}
