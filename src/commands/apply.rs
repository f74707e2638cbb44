use crate::areas::session::Session;
use crate::artifacts::core::errors::PatchError;
use crate::artifacts::patch::diagnostics::parse_created_paths;
use crate::artifacts::patch::outcome::{PatchOutcome, PatchState, conflict_label};
use crate::artifacts::patch::patch_file::PatchFile;
use crate::artifacts::patch::report::ApplyReport;
use crate::artifacts::tools::git::{GIT, Git};
use crate::commands::GIT_HINT;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

impl Session {
    /// Apply every patch in name order.
    ///
    /// Clean patches are applied, patches whose reverse applies are skipped.
    /// A conflicting patch is still attempted; if git rejects it the checkout is
    /// hard-reset and the run ends with [`PatchError::PatchConflict`]. A clean
    /// patch that git then refuses to apply ends the run the same way with
    /// [`PatchError::ApplyFailed`].
    ///
    /// The reset also deletes files that patches earlier in the run added, so
    /// the checkout ends up as it was before the run. Other untracked files are
    /// left alone.
    pub fn apply(&self) -> anyhow::Result<ApplyReport> {
        let mut report = ApplyReport::default();

        writeln!(self.writer(), "Applying patches...")?;
        let Some(patches) = self.collect_patches()? else {
            return Ok(report);
        };
        self.require_tool(GIT, GIT_HINT)?;
        self.require_checkout_repository()?;

        let git = self.git();
        for patch in patches {
            writeln!(self.writer(), "Applying {}...", patch.name())?;
            let outcome = self.apply_patch(&git, &patch, &mut report)?;
            info!(patch = patch.name(), ?outcome, "done");
            report.record(patch, outcome);
        }

        if report.applied_count() > 0 {
            writeln!(self.writer(), "All applicable patches applied successfully.")?;
        } else {
            writeln!(
                self.writer(),
                "No new patches were applied (all patches may already be applied)."
            )?;
        }

        Ok(report)
    }

    fn apply_patch(
        &self,
        git: &Git<'_>,
        patch: &PatchFile,
        report: &mut ApplyReport,
    ) -> anyhow::Result<PatchOutcome> {
        match self.classify(git, patch)? {
            PatchState::Clean => {
                let created = self.created_paths(git, patch)?;
                if let Some(detail) = self.try_apply(git, patch)? {
                    writeln!(self.writer(), "Error applying {}: {}", patch.name(), detail)?;
                    self.rollback(git, report)?;
                    return Err(PatchError::ApplyFailed {
                        patch: patch.name().to_string(),
                        detail,
                    }
                    .into());
                }

                report.track_created(created);
                writeln!(self.writer(), "{} {}", PatchOutcome::Applied, patch.name())?;
                Ok(PatchOutcome::Applied)
            }
            PatchState::AlreadyApplied => {
                writeln!(
                    self.writer(),
                    "{} {} appears to be already applied",
                    PatchOutcome::AlreadyApplied,
                    patch.name()
                )?;
                Ok(PatchOutcome::AlreadyApplied)
            }
            PatchState::Conflict(failures) => {
                writeln!(
                    self.writer(),
                    "{} {} has conflicts or cannot be applied:",
                    conflict_label(),
                    patch.name()
                )?;
                for failure in &failures {
                    writeln!(self.writer(), "    {}", failure)?;
                }
                warn!(patch = patch.name(), "neither direction applies, attempting anyway");

                let created = self.created_paths(git, patch)?;
                if self.try_apply(git, patch)?.is_some() {
                    self.rollback(git, report)?;
                    return Err(PatchError::PatchConflict {
                        patch: patch.name().to_string(),
                        failures,
                    }
                    .into());
                }

                report.track_created(created);
                writeln!(self.writer(), "{} {}", PatchOutcome::Applied, patch.name())?;
                Ok(PatchOutcome::Applied)
            }
        }
    }

    /// Files the patch would add. git applies all-or-nothing, so these only
    /// exist once the apply has succeeded.
    fn created_paths(&self, git: &Git<'_>, patch: &PatchFile) -> anyhow::Result<Vec<PathBuf>> {
        let summary = git.summary(patch.path())?;
        if !summary.success() {
            warn!(
                patch = patch.name(),
                stderr = summary.stderr().trim(),
                "could not list files the patch creates"
            );
            return Ok(Vec::new());
        }

        Ok(parse_created_paths(summary.stdout()))
    }

    /// `None` when git applied the patch, otherwise git's complaint.
    fn try_apply(&self, git: &Git<'_>, patch: &PatchFile) -> anyhow::Result<Option<String>> {
        let output = git.apply(patch.path())?;
        if output.success() {
            return Ok(None);
        }

        let detail = output.stderr().trim();
        Ok(Some(if detail.is_empty() {
            "git apply exited with a failure status".to_string()
        } else {
            detail.to_string()
        }))
    }

    fn rollback(&self, git: &Git<'_>, report: &ApplyReport) -> anyhow::Result<()> {
        writeln!(self.writer(), "Attempting to revert any partial changes...")?;

        let output = git.reset_hard()?;
        if !output.success() {
            anyhow::bail!(
                "failed to reset {}: {}",
                self.checkout().path().display(),
                output.stderr().trim()
            );
        }

        let removed = self.checkout().remove_created(report.created_files())?;
        if removed > 0 {
            info!(removed, "removed files added earlier in this run");
        }

        writeln!(self.writer(), "Reverted to previous state.")?;
        Ok(())
    }
}
