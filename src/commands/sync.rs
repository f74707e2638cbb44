use crate::areas::checkout::{Checkout, FETCH_CONFIG, GCLIENT_FILE, UPSTREAM_URL};
use crate::areas::session::Session;
use crate::artifacts::core::errors::PatchError;
use crate::artifacts::core::settings::DEFAULT_CHECKOUT_DIR;
use crate::artifacts::tools::depot_tools::FETCH;
use crate::artifacts::tools::git::GIT;
use crate::commands::GIT_HINT;
use std::io::Write;
use tracing::{info, warn};

const DEPOT_TOOLS_HINT: &str =
    "Please ensure depot_tools is installed and added to your PATH.";

impl Session {
    /// Make sure a checkout of the upstream exists at the configured location.
    ///
    /// Inside a gclient workspace nothing is done. An existing checkout is
    /// validated against the upstream and pulled; a missing one is fetched
    /// without history.
    pub fn sync(&self) -> anyhow::Result<()> {
        let base_dir = self.settings().base_dir();

        if let Some(root) = Checkout::enclosing_gclient_root(base_dir) {
            writeln!(
                self.writer(),
                "Running inside a gclient workspace at {}. Skipping clone/fetch step.",
                root.display()
            )?;
            return Ok(());
        }

        if self.checkout().exists() {
            self.update_checkout()
        } else {
            self.fetch_checkout()
        }
    }

    fn update_checkout(&self) -> anyhow::Result<()> {
        let checkout = self.checkout();
        writeln!(
            self.writer(),
            "Checkout directory {} exists but no {} file was found. Checking that it is a valid Chromium repository...",
            checkout.path().display(),
            GCLIENT_FILE
        )?;

        if !checkout.is_git_repository() {
            return Err(PatchError::NotAGitRepo {
                path: checkout.path().to_path_buf(),
            }
            .into());
        }
        self.require_tool(GIT, GIT_HINT)?;

        let git = self.git();
        let origin = git.origin_url()?;
        if !origin.success() {
            warn!(stderr = origin.stderr().trim(), "origin lookup failed");
            writeln!(
                self.writer(),
                "Could not determine repository origin. Assuming it's valid and continuing..."
            )?;
            return Ok(());
        }

        let origin_url = origin.stdout().trim();
        if !Checkout::tracks_upstream(origin_url) {
            return Err(PatchError::NotAChromiumRepo {
                path: checkout.path().to_path_buf(),
                origin: origin_url.to_string(),
            }
            .into());
        }

        writeln!(self.writer(), "Valid Chromium repository found. Updating...")?;
        let pull = git.pull()?;
        if !pull.success() {
            anyhow::bail!("git pull failed in {}", checkout.path().display());
        }
        writeln!(self.writer(), "Repository updated.")?;

        Ok(())
    }

    fn fetch_checkout(&self) -> anyhow::Result<()> {
        let base_dir = self.settings().base_dir();
        let checkout = self.checkout().path();

        if checkout.file_name() != Some(std::ffi::OsStr::new(DEFAULT_CHECKOUT_DIR)) {
            anyhow::bail!(
                "cannot fetch into {}: fetch always creates a '{}' directory. \
                Point --checkout at a directory named '{}' or at an existing checkout.",
                checkout.display(),
                DEFAULT_CHECKOUT_DIR,
                DEFAULT_CHECKOUT_DIR
            );
        }
        self.require_tool(FETCH, DEPOT_TOOLS_HINT)?;

        writeln!(
            self.writer(),
            "Fetching Chromium repository ({}) into {}...",
            UPSTREAM_URL,
            base_dir.display()
        )?;
        std::fs::create_dir_all(base_dir)?;

        let fetch = self.depot_tools().fetch_no_history(FETCH_CONFIG, base_dir)?;
        if !fetch.success() {
            anyhow::bail!("fetch --no-history {} failed in {}", FETCH_CONFIG, base_dir.display());
        }
        info!(base = %base_dir.display(), "fetch finished");
        writeln!(self.writer(), "Chromium fetched successfully.")?;

        Ok(())
    }
}
