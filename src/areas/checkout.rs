//! The upstream working tree
//!
//! A checkout is only ever inspected on the filesystem level here (does it
//! exist, is it a git repository, is it inside a gclient workspace). Anything
//! deeper goes through git.

use anyhow::Context;
use std::path::{Component, Path, PathBuf};

/// Marker file depot_tools drops at the root of a gclient workspace.
pub const GCLIENT_FILE: &str = ".gclient";

/// Upstream the checkout is expected to track.
pub const UPSTREAM_URL: &str = "https://chromium.googlesource.com/chromium/src.git";
/// `fetch` configuration that produces the checkout.
pub const FETCH_CONFIG: &str = "chromium";
/// Substring an origin URL must contain to be accepted as upstream.
pub const UPSTREAM_MARKER: &str = "chromium";

#[derive(Debug)]
pub struct Checkout {
    path: Box<Path>,
}

impl Checkout {
    pub fn new(path: Box<Path>) -> Self {
        Checkout { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// `.git` may be a directory or, for worktrees and submodules, a file.
    pub fn is_git_repository(&self) -> bool {
        self.path.join(".git").exists()
    }

    /// Whether `toplevel`, as reported by `git rev-parse --show-toplevel`, is this checkout.
    ///
    /// A plain directory nested in some other repository resolves to that
    /// repository's root instead.
    pub fn is_toplevel(&self, toplevel: &Path) -> bool {
        match (self.path.canonicalize(), toplevel.canonicalize()) {
            (Ok(checkout), Ok(toplevel)) => checkout == toplevel,
            _ => false,
        }
    }

    /// Delete files that patches added and a hard reset left behind as untracked,
    /// then any directories that removal emptied. Returns how many files went away.
    ///
    /// Paths that would leave the checkout are ignored.
    pub fn remove_created<'p>(
        &self,
        paths: impl IntoIterator<Item = &'p Path>,
    ) -> anyhow::Result<usize> {
        let mut removed = 0;

        for relative in paths {
            if !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
            {
                continue;
            }

            let file = self.path.join(relative);
            if file.symlink_metadata().is_err() || file.is_dir() {
                continue;
            }
            std::fs::remove_file(&file)
                .with_context(|| format!("failed to remove {}", file.display()))?;
            removed += 1;

            for dir in file.ancestors().skip(1) {
                if dir == &*self.path || !is_empty_dir(dir) {
                    break;
                }
                std::fs::remove_dir(dir)
                    .with_context(|| format!("failed to remove {}", dir.display()))?;
            }
        }

        Ok(removed)
    }

    /// Nearest directory at or above `start` that holds a `.gclient` file.
    pub fn enclosing_gclient_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(GCLIENT_FILE).is_file())
            .map(Path::to_path_buf)
    }

    pub fn tracks_upstream(origin_url: &str) -> bool {
        origin_url.to_lowercase().contains(UPSTREAM_MARKER)
    }
}

fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_none())
}
