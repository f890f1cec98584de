//! Domain entities: contact records and their flat-file line format

use std::fmt;

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Ordering key within the directory
    pub name: String,
    /// Optional `+` followed by 10-15 digits
    pub phone: String,
    /// Dotted word characters, `local@domain.tld`
    pub email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Parse one `name,phone,email` record line.
    ///
    /// Splits on the first two commas only: everything after the second comma
    /// is taken verbatim as the email, so a comma inside the email survives
    /// while a comma inside name or phone corrupts the record. The format has
    /// no escaping. Lines with fewer than two commas yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.splitn(3, ',');
        let name = fields.next()?;
        let phone = fields.next()?;
        let email = fields.next()?;
        Some(Self::new(name, phone, email))
    }

    /// Render the `name,phone,email` record line for this contact.
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.name, self.phone, self.email)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_record_line_when_parsing_then_splits_into_three_fields() {
        let contact = Contact::parse_line("Bob,+4915112345678,bob@example.com").unwrap();

        assert_eq!(contact.name, "Bob");
        assert_eq!(contact.phone, "+4915112345678");
        assert_eq!(contact.email, "bob@example.com");
    }

    #[test]
    fn given_line_with_extra_commas_when_parsing_then_remainder_stays_in_email() {
        let contact = Contact::parse_line("Bob,123,bob@example.com,stray").unwrap();

        assert_eq!(contact.email, "bob@example.com,stray");
    }

    #[test]
    fn given_line_with_too_few_commas_when_parsing_then_yields_nothing() {
        assert!(Contact::parse_line("Bob,123").is_none());
        assert!(Contact::parse_line("no commas here").is_none());
        assert!(Contact::parse_line("").is_none());
    }

    #[test]
    fn given_contact_when_rendering_then_line_parses_back_unchanged() {
        let contact = Contact::new("Alice", "+11234567890", "alice@mail.example.org");

        let line = contact.to_line();

        assert_eq!(line, "Alice,+11234567890,alice@mail.example.org");
        assert_eq!(Contact::parse_line(&line).unwrap(), contact);
    }
}
