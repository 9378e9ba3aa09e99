//! Command implementations for the dupexports binary.
//!
//! - **check**: resolve the source set, analyze it, detect duplicate exports
//!   and write the report

pub mod check;

pub use check::{handle_check, CheckConfig, CheckOutcome};
