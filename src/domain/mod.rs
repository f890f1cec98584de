//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod contact;
pub mod directory;
pub mod error;
pub mod validate;

pub use contact::Contact;
pub use directory::{Directory, InOrderIter};
pub use error::DomainError;
pub use validate::ContactValidator;
