//! git command wrappers
//!
//! All commands run with `-C <checkout>` so the process working directory never matters.

use crate::artifacts::tools::{Invocation, Runner, ToolOutput};
use derive_new::new;
use std::path::Path;

pub const GIT: &str = "git";

/// Which way a patch is checked against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(new)]
pub struct Git<'r> {
    runner: &'r dyn Runner,
    work_tree: &'r Path,
}

impl Git<'_> {
    fn command(&self) -> Invocation {
        Invocation::new(GIT).arg("-C").arg(self.work_tree)
    }

    /// `git apply --check [--reverse] <patch>`; never touches the tree.
    pub fn apply_check(&self, patch: &Path, direction: Direction) -> anyhow::Result<ToolOutput> {
        let mut invocation = self.command().args(["apply", "--check"]);
        if direction == Direction::Reverse {
            invocation = invocation.arg("--reverse");
        }

        self.runner.run(&invocation.arg(patch))
    }

    /// `git apply --whitespace=fix <patch>`
    pub fn apply(&self, patch: &Path) -> anyhow::Result<ToolOutput> {
        self.runner.run(
            &self
                .command()
                .args(["apply", "--whitespace=fix"])
                .arg(patch),
        )
    }

    /// `git apply --summary <patch>`; lists created, deleted and renamed files without applying.
    pub fn summary(&self, patch: &Path) -> anyhow::Result<ToolOutput> {
        self.runner
            .run(&self.command().args(["apply", "--summary"]).arg(patch))
    }

    /// Top level of the repository git resolves from the work tree.
    pub fn toplevel(&self) -> anyhow::Result<ToolOutput> {
        self.runner
            .run(&self.command().args(["rev-parse", "--show-toplevel"]))
    }

    pub fn reset_hard(&self) -> anyhow::Result<ToolOutput> {
        self.runner.run(&self.command().args(["reset", "--hard"]))
    }

    pub fn origin_url(&self) -> anyhow::Result<ToolOutput> {
        self.runner
            .run(&self.command().args(["remote", "get-url", "origin"]))
    }

    pub fn pull(&self) -> anyhow::Result<ToolOutput> {
        self.runner.run(&self.command().arg("pull").passthrough())
    }
}
