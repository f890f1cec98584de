//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors are the reported outcomes of directory operations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid phone number format: {value}")]
    InvalidPhone { value: String },

    #[error("invalid email format: {value}")]
    InvalidEmail { value: String },

    #[error("no contact found with name: {name}")]
    NotFound { name: String },
}
