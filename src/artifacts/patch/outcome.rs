use crate::artifacts::patch::diagnostics::PatchFailure;
use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 8;

fn padded(label: &str) -> String {
    format!("{:<width$}", label, width = LABEL_WIDTH)
}

/// Label printed next to a patch that neither applies nor reverse-applies.
pub fn conflict_label() -> ColoredString {
    padded("conflict").as_str().red()
}

/// Where a patch stands relative to the checkout, judged by dry runs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchState {
    /// The forward check passes.
    Clean,
    /// The forward check fails but the reverse check passes.
    AlreadyApplied,
    /// Neither direction applies.
    Conflict(Vec<PatchFailure>),
}

impl PatchState {
    pub fn is_conflict(&self) -> bool {
        matches!(self, PatchState::Conflict(_))
    }
}

impl std::fmt::Display for PatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PatchState::Clean => padded("clean").as_str().green(),
            PatchState::AlreadyApplied => padded("applied").as_str().yellow(),
            PatchState::Conflict(_) => conflict_label(),
        };
        write!(f, "{}", label)
    }
}

/// What an `apply` run did with a patch.
///
/// A conflict never shows up here: it ends the run with
/// [`PatchError::PatchConflict`](crate::artifacts::core::errors::PatchError::PatchConflict).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    AlreadyApplied,
}

impl std::fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PatchOutcome::Applied => padded("applied").as_str().green(),
            PatchOutcome::AlreadyApplied => padded("skipped").as_str().yellow(),
        };
        write!(f, "{}", label)
    }
}
