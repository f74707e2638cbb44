use crate::artifacts::patch::diagnostics::PatchFailure;
use std::path::PathBuf;

/// Failures the operator has to act on.
///
/// Everything else (spawn failures, unreadable directories) travels as a plain
/// `anyhow::Error` with context attached.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("'{tool}' command not found in PATH. {hint}")]
    ToolMissing { tool: String, hint: &'static str },

    #[error(
        "directory {} exists but doesn't appear to be a Chromium repository (origin: {origin}). \
        Please remove the directory or choose a different location.",
        path.display()
    )]
    NotAChromiumRepo { path: PathBuf, origin: String },

    #[error(
        "directory {} exists but is not a git repository. \
        Please remove the directory or choose a different location.",
        path.display()
    )]
    NotAGitRepo { path: PathBuf },

    #[error("patch {patch} cannot be applied cleanly")]
    PatchCheckFailed {
        patch: String,
        failures: Vec<PatchFailure>,
    },

    #[error("patch {patch} has conflicts or cannot be applied; checkout was reset")]
    PatchConflict {
        patch: String,
        failures: Vec<PatchFailure>,
    },

    #[error("error applying {patch}: {detail}; checkout was reset")]
    ApplyFailed { patch: String, detail: String },
}

impl PatchError {
    pub fn tool_missing(tool: &str, hint: &'static str) -> Self {
        PatchError::ToolMissing {
            tool: tool.to_string(),
            hint,
        }
    }
}
