//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Only one-shot commands exit through this mapping; the interactive
    /// shell renders every outcome as a message and keeps going.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::NotFound { .. }) => crate::exitcode::NOMATCH,
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::ImportFile { .. } => crate::exitcode::NOINPUT,
                ApplicationError::ExportFile { .. } => crate::exitcode::CANTCREAT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}
