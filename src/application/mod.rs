//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and owns the flat-file record format
//! boundary.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
