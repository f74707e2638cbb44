//! Patch files and what happens to them
//!
//! - `diagnostics`: failure locations parsed from `git apply` stderr
//! - `outcome`: classification of a patch against the checkout and the result of applying it
//! - `patch_file`: a `.patch` file on disk, ordered by name
//! - `report`: per-run summaries for `apply` and `check`

pub mod diagnostics;
pub mod outcome;
pub mod patch_file;
pub mod report;
