use crate::artifacts::tools::{Invocation, Runner, ToolOutput};
use anyhow::Context;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, trace};

/// Runs invocations as real child processes, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<ToolOutput> {
        let mut command = Command::new(invocation.program());
        command.args(invocation.arguments());
        if let Some(cwd) = invocation.cwd() {
            command.current_dir(cwd);
        }

        debug!(command = %invocation, cwd = ?invocation.cwd(), "running");

        if invocation.is_passthrough() {
            let status = command
                .status()
                .with_context(|| format!("failed to run `{}`", invocation))?;
            debug!(command = %invocation, %status, "finished");

            return Ok(ToolOutput::new(status.success(), String::new(), String::new()));
        }

        let output = command
            .output()
            .with_context(|| format!("failed to run `{}`", invocation))?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        debug!(command = %invocation, status = %output.status, "finished");
        trace!(%stdout, %stderr, "captured output");

        Ok(ToolOutput::new(output.status.success(), stdout, stderr))
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}
