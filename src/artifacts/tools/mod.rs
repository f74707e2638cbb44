//! Subprocess boundary
//!
//! Every external program (git, depot_tools `fetch`, `caffeinate`) is reached
//! through the [`Runner`] trait. The binary uses [`system::SystemRunner`]; tests
//! substitute a scripted runner that records what would have been executed.
//!
//! - `depot_tools`: `fetch` wrapper for fresh checkouts
//! - `git`: the handful of git commands the applier and bootstrap need
//! - `system`: `std::process` backed runner

pub mod depot_tools;
pub mod git;
pub mod system;


use derive_new::new;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single program invocation: program name, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    /// Let the child write straight to the terminal instead of capturing its output.
    passthrough: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            passthrough: false,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self = self.arg(arg);
        }
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }
}

/// Lossy rendering for logs and messages; the real arguments are passed to the child untouched.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished invocation
///
/// Passthrough invocations leave `stdout` and `stderr` empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct ToolOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

impl ToolOutput {
    pub fn succeeded() -> Self {
        ToolOutput::new(true, String::new(), String::new())
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        ToolOutput::new(false, String::new(), stderr.into())
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

/// Executes external programs on behalf of the session.
pub trait Runner {
    /// Run the invocation to completion.
    ///
    /// A nonzero exit is *not* an error here; it is reported through
    /// [`ToolOutput::success`]. Errors mean the program could not be started at all.
    fn run(&self, invocation: &Invocation) -> anyhow::Result<ToolOutput>;

    /// Resolve a program name on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}
