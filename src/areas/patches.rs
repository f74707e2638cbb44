use crate::artifacts::patch::patch_file::PatchFile;
use crate::artifacts::patch::patch_file::PATCH_EXTENSION;
use anyhow::Context;
use std::path::Path;
use tracing::warn;

/// Directory of `.patch` files, applied in file-name order.
#[derive(Debug)]
pub struct PatchDir {
    path: Box<Path>,
}

impl PatchDir {
    pub fn new(path: Box<Path>) -> Self {
        PatchDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Regular files ending in `.patch`, sorted by name. Subdirectories are not descended into.
    pub fn list(&self) -> anyhow::Result<Vec<PatchFile>> {
        let entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("failed to read patches directory {}", self.path.display()))?;

        let mut patches = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("failed to read an entry of {}", self.path.display())
            })?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            match PatchFile::try_from_path(&path) {
                Some(patch) => patches.push(patch),
                None if has_patch_suffix(&entry.file_name()) => {
                    warn!("skipping {}: file name is not valid UTF-8", path.display());
                }
                None => {}
            }
        }

        patches.sort();
        Ok(patches)
    }
}

fn has_patch_suffix(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().ends_with(PATCH_EXTENSION.as_bytes())
}
