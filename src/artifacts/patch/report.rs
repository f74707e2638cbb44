use crate::artifacts::patch::outcome::{PatchOutcome, PatchState};
use crate::artifacts::patch::patch_file::PatchFile;
use std::path::{Path, PathBuf};

/// Outcomes of an `apply` run, in application order.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    entries: Vec<(PatchFile, PatchOutcome)>,
    created: Vec<PathBuf>,
}

impl ApplyReport {
    pub fn record(&mut self, patch: PatchFile, outcome: PatchOutcome) {
        self.entries.push((patch, outcome));
    }

    pub fn entries(&self) -> &[(PatchFile, PatchOutcome)] {
        &self.entries
    }

    /// Remember files an applied patch added, relative to the checkout.
    pub fn track_created(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.created.extend(paths);
    }

    pub fn created_files(&self) -> impl Iterator<Item = &Path> {
        self.created.iter().map(PathBuf::as_path)
    }

    pub fn applied_count(&self) -> usize {
        self.count(PatchOutcome::Applied)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(PatchOutcome::AlreadyApplied)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self, outcome: PatchOutcome) -> usize {
        self.entries.iter().filter(|(_, o)| *o == outcome).count()
    }
}

/// Predicted states from a `check` run.
#[derive(Debug, Clone, Default)]
pub struct PatchPlan {
    entries: Vec<(PatchFile, PatchState)>,
}

impl PatchPlan {
    pub fn record(&mut self, patch: PatchFile, state: PatchState) {
        self.entries.push((patch, state));
    }

    pub fn entries(&self) -> &[(PatchFile, PatchState)] {
        &self.entries
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &PatchFile> {
        self.entries
            .iter()
            .filter(|(_, state)| state.is_conflict())
            .map(|(patch, _)| patch)
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts().next().is_some()
    }
}
