use std::path::{Path, PathBuf};

pub const PATCH_EXTENSION: &str = ".patch";

/// A patch on disk, identified and ordered by its file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatchFile {
    name: String,
    path: PathBuf,
}

impl PatchFile {
    /// Accepts only file names carrying the `.patch` suffix.
    pub fn try_from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if !Self::is_patch_name(name) {
            return None;
        }

        Some(PatchFile {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }

    pub fn is_patch_name(name: &str) -> bool {
        name.ends_with(PATCH_EXTENSION)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Ord for PatchFile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for PatchFile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for PatchFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
