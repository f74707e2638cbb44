use crate::areas::session::Session;
use crate::artifacts::core::errors::PatchError;
use crate::artifacts::patch::diagnostics::parse_failures;
use crate::artifacts::patch::outcome::PatchState;
use crate::artifacts::patch::patch_file::PatchFile;
use crate::artifacts::patch::report::PatchPlan;
use crate::artifacts::tools::git::{Direction, GIT, Git};
use crate::commands::GIT_HINT;
use std::io::Write;
use tracing::debug;

impl Session {
    /// Dry-run every patch against the current checkout and report what `apply` would do.
    ///
    /// Patches are checked independently; one patch that depends on an earlier
    /// one will show up as a conflict here even though `apply` would succeed.
    pub fn check(&self) -> anyhow::Result<PatchPlan> {
        let mut plan = PatchPlan::default();

        let Some(patches) = self.collect_patches()? else {
            return Ok(plan);
        };
        self.require_tool(GIT, GIT_HINT)?;
        self.require_checkout_repository()?;

        let git = self.git();
        for patch in patches {
            let state = self.classify(&git, &patch)?;

            writeln!(self.writer(), "{} {}", state, patch.name())?;
            if let PatchState::Conflict(failures) = &state {
                for failure in failures {
                    writeln!(self.writer(), "    {}", failure)?;
                }
            }

            plan.record(patch, state);
        }

        let conflicts = plan.conflicts().count();
        if conflicts > 0 {
            writeln!(
                self.writer(),
                "{} of {} patches cannot be applied.",
                conflicts,
                plan.entries().len()
            )?;
        } else {
            writeln!(self.writer(), "All patches can be applied or are already applied.")?;
        }

        Ok(plan)
    }

    /// Forward check, then reverse check if needed.
    pub(crate) fn classify(&self, git: &Git<'_>, patch: &PatchFile) -> anyhow::Result<PatchState> {
        let failures = match check_forward(git, patch) {
            Ok(()) => return Ok(PatchState::Clean),
            Err(err) => match err.downcast::<PatchError>() {
                Ok(PatchError::PatchCheckFailed { failures, .. }) => failures,
                Ok(other) => return Err(other.into()),
                Err(err) => return Err(err),
            },
        };
        debug!(patch = patch.name(), failures = failures.len(), "checking reverse");

        let reverse = git.apply_check(patch.path(), Direction::Reverse)?;
        if reverse.success() {
            Ok(PatchState::AlreadyApplied)
        } else {
            Ok(PatchState::Conflict(failures))
        }
    }

    /// Sorted patch list, or `None` after telling the operator there is nothing to do.
    pub(crate) fn collect_patches(&self) -> anyhow::Result<Option<Vec<PatchFile>>> {
        let patches = self.patches();

        if !patches.exists() {
            writeln!(
                self.writer(),
                "Patches directory '{}' not found.",
                patches.path().display()
            )?;
            return Ok(None);
        }

        let files = patches.list()?;
        if files.is_empty() {
            writeln!(
                self.writer(),
                "No patch files found in the '{}' directory.",
                patches.path().display()
            )?;
            return Ok(None);
        }

        Ok(Some(files))
    }
}

/// [`PatchError::PatchCheckFailed`] with git's parsed complaints when the patch does not apply as is.
pub(crate) fn check_forward(git: &Git<'_>, patch: &PatchFile) -> anyhow::Result<()> {
    let forward = git.apply_check(patch.path(), Direction::Forward)?;
    if forward.success() {
        return Ok(());
    }

    Err(PatchError::PatchCheckFailed {
        patch: patch.name().to_string(),
        failures: parse_failures(forward.stderr()),
    }
    .into())
}
