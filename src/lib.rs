//! rolo: a contact directory backed by a name-ordered in-memory store.
//!
//! The domain layer owns the search tree and field validation, the
//! application layer is the validated gateway plus the flat-file record
//! format, and the CLI layer dispatches one-shot subcommands or runs the
//! interactive menu shell.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::services::{ContactService, ImportOutcome};
pub use application::{ApplicationError, ApplicationResult};
pub use config::Settings;
pub use domain::{Contact, ContactValidator, Directory, DomainError};
