use std::path::{Path, PathBuf};

pub const DEFAULT_CHECKOUT_DIR: &str = "src";
pub const DEFAULT_PATCHES_DIR: &str = "patches";

/// Absolute locations for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    checkout: PathBuf,
    patches: PathBuf,
}

impl Settings {
    /// Resolve possibly-relative directories against `cwd`. Nothing has to exist yet.
    pub fn resolve(cwd: &Path, checkout: &Path, patches: &Path) -> Self {
        Settings {
            checkout: cwd.join(checkout),
            patches: cwd.join(patches),
        }
    }

    pub fn checkout_dir(&self) -> &Path {
        &self.checkout
    }

    pub fn patches_dir(&self) -> &Path {
        &self.patches
    }

    /// Directory the checkout lives in; `fetch` runs here and creates `src/` below it.
    pub fn base_dir(&self) -> &Path {
        self.checkout.parent().unwrap_or(&self.checkout)
    }
}
