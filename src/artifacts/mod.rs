//! Data types and the subprocess boundary
//!
//! - `core`: errors and settings
//! - `patch`: patch files, their states and run reports
//! - `tools`: git and depot_tools behind the `Runner` trait

pub mod core;
pub mod patch;
pub mod tools;
