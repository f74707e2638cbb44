//! Failure locations reported by `git apply --check`
//!
//! git reports a rejected hunk as a pair of lines:
//!
//! ```text
//! error: patch failed: chrome/browser/foo.cc:120
//! error: chrome/browser/foo.cc: patch does not apply
//! ```
//!
//! and missing or unexpected files as a single `error: <path>: <reason>` line.
//! Both shapes collapse into one [`PatchFailure`] per path.
//!
//! `git apply --summary` is read as well, to learn which files a patch adds.

use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

static PATCH_FAILED_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^error: patch failed: (?P<path>.+):(?P<line>\d+)$")
        .unwrap_or_else(|e| panic!("invalid patch-failed regex: {e}"))
});

static PATH_REASON_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^error: (?P<path>.+?): (?P<reason>patch does not apply|No such file or directory|does not exist in index|already exists in working directory|already exists in index|does not match index)$",
    )
    .unwrap_or_else(|e| panic!("invalid path-reason regex: {e}"))
});

static CREATE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^ create mode \d+ (?P<path>.+)$")
        .unwrap_or_else(|e| panic!("invalid create-mode regex: {e}"))
});

static RENAME_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^ (?:rename|copy) (?P<paths>.+) \(\d+%\)$")
        .unwrap_or_else(|e| panic!("invalid rename regex: {e}"))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchFailure {
    pub path: String,
    pub line: Option<u32>,
    pub reason: String,
}

impl fmt::Display for PatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{} ({})", self.path, line, self.reason),
            None => write!(f, "{} ({})", self.path, self.reason),
        }
    }
}

/// Extract per-file failures from `git apply` stderr, in order of first appearance.
pub fn parse_failures(stderr: &str) -> Vec<PatchFailure> {
    let mut failures: Vec<PatchFailure> = Vec::new();

    for line in stderr.lines().map(str::trim_end) {
        if let Some(caps) = PATCH_FAILED_RE.captures(line) {
            let path = &caps["path"];
            let line_no = caps["line"].parse::<u32>().ok();
            match failures.iter_mut().find(|f| f.path == path) {
                Some(existing) => existing.line = existing.line.or(line_no),
                None => failures.push(PatchFailure {
                    path: path.to_string(),
                    line: line_no,
                    reason: "patch does not apply".to_string(),
                }),
            }
        } else if let Some(caps) = PATH_REASON_RE.captures(line) {
            let path = &caps["path"];
            let reason = &caps["reason"];
            match failures.iter_mut().find(|f| f.path == path) {
                Some(existing) => existing.reason = reason.to_string(),
                None => failures.push(PatchFailure {
                    path: path.to_string(),
                    line: None,
                    reason: reason.to_string(),
                }),
            }
        }
    }

    failures
}

/// Paths, relative to the work tree, that a patch brings into existence.
///
/// Rename and copy destinations count as created: after a hard reset they are
/// left behind as untracked files just like plain additions.
pub fn parse_created_paths(summary: &str) -> Vec<PathBuf> {
    summary
        .lines()
        .map(str::trim_end)
        .filter_map(|line| {
            if let Some(caps) = CREATE_RE.captures(line) {
                Some(caps["path"].to_string())
            } else {
                RENAME_RE
                    .captures(line)
                    .and_then(|caps| rename_destination(&caps["paths"]))
            }
        })
        .map(PathBuf::from)
        .collect()
}

/// Destination of `old => new`, including git's shared-part form `dir/{old => new}/file`.
fn rename_destination(paths: &str) -> Option<String> {
    if let (Some(open), Some(close)) = (paths.find('{'), paths.rfind('}'))
        && open < close
    {
        let (_, new) = paths[open + 1..close].split_once(" => ")?;
        let joined = format!("{}{}{}", &paths[..open], new, &paths[close + 1..]);
        return Some(joined.replace("//", "/").trim_start_matches('/').to_string());
    }

    paths.split_once(" => ").map(|(_, new)| new.to_string())
}
