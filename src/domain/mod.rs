//! src/domain/mod.rs

mod outcome;
mod reason;

pub use outcome::ValidationOutcome;
pub use reason::{EmailError, PasswordError};
