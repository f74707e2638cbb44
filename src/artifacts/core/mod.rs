//! Shared types used across the application
//!
//! - `errors`: the failure taxonomy surfaced to the operator
//! - `settings`: resolved paths for one invocation

pub mod errors;
pub mod settings;
