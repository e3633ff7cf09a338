//! src/lib.rs
pub mod configuration;
pub mod configurator;
pub mod domain;
pub mod error;
pub mod functional;
pub mod harness;
pub mod telemetry;
pub mod validators;
