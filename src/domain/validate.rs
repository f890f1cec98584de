//! Contact field validation

use regex::Regex;

use crate::domain::error::DomainError;

/// Validation gate for contact payload fields.
///
/// Both patterns are compiled once at construction and anchored so the whole
/// field has to match, not just a substring.
#[derive(Debug)]
pub struct ContactValidator {
    phone: Regex,
    email: Regex,
}

impl ContactValidator {
    pub fn new() -> Self {
        Self {
            phone: Regex::new(r"^\+?\d{10,15}$").unwrap(),
            email: Regex::new(r"^\w+(\.\w+)*@\w+(\.\w+)+$").unwrap(),
        }
    }

    /// Check both payload fields, phone first.
    ///
    /// The name is deliberately unconstrained; it is only the ordering key.
    pub fn validate(&self, phone: &str, email: &str) -> Result<(), DomainError> {
        if !self.phone.is_match(phone) {
            return Err(DomainError::InvalidPhone {
                value: phone.to_string(),
            });
        }
        if !self.email.is_match(email) {
            return Err(DomainError::InvalidEmail {
                value: email.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}
