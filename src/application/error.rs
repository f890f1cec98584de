//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain outcomes and add the file-handling context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot open {path} for reading: {source}", path = .path.display())]
    ImportFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot open {path} for writing: {source}", path = .path.display())]
    ExportFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
