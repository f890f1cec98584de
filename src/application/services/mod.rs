//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services are concrete structs, not traits.

mod contacts;

pub use contacts::{ContactService, ImportOutcome};
