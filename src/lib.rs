//! Keep a local Chromium checkout in shape and layer a directory of patches on top of it.
//!
//! - `areas`: the session, the checkout and the patch directory
//! - `artifacts`: patch types, settings, errors and the subprocess boundary
//! - `commands`: `sync`, `apply` and `check`

pub mod areas;
pub mod artifacts;
pub mod commands;
