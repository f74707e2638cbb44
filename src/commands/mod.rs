//! Command implementations
//!
//! Each command is an `impl Session` block, so they share output, settings and
//! the subprocess runner.
//!
//! - `sync`: make sure the checkout exists and tracks the upstream
//! - `apply`: apply every patch in order, skipping those already present
//! - `check`: classify every patch without touching the checkout

pub mod apply;
pub mod check;
pub mod sync;

/// Hint shown when git itself is missing.
pub(crate) const GIT_HINT: &str = "Please install git and make sure it is on your PATH.";
