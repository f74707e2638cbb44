use crate::areas::checkout::Checkout;
use crate::areas::patches::PatchDir;
use crate::artifacts::core::errors::PatchError;
use crate::artifacts::core::settings::Settings;
use crate::artifacts::tools::Runner;
use crate::artifacts::tools::depot_tools::DepotTools;
use crate::artifacts::tools::git::Git;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// One invocation of the tool: where things live, where output goes and how
/// external programs are run.
pub struct Session {
    settings: Settings,
    runner: Box<dyn Runner>,
    writer: RefCell<Box<dyn std::io::Write>>,
    checkout: Checkout,
    patches: PatchDir,
}

impl Session {
    pub fn new(
        settings: Settings,
        runner: Box<dyn Runner>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        let checkout = Checkout::new(settings.checkout_dir().into());
        let patches = PatchDir::new(settings.patches_dir().into());

        Session {
            settings,
            runner,
            writer: RefCell::new(writer),
            checkout,
            patches,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn runner(&self) -> &dyn Runner {
        self.runner.as_ref()
    }

    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    pub fn patches(&self) -> &PatchDir {
        &self.patches
    }

    pub fn git(&self) -> Git<'_> {
        Git::new(self.runner(), self.checkout.path())
    }

    pub fn depot_tools(&self) -> DepotTools<'_> {
        DepotTools::new(self.runner())
    }

    /// Fail with [`PatchError::ToolMissing`] unless `program` is on the search path.
    pub fn require_tool(&self, program: &str, hint: &'static str) -> anyhow::Result<PathBuf> {
        self.runner
            .locate(program)
            .ok_or_else(|| PatchError::tool_missing(program, hint).into())
    }

    /// Fail unless the checkout is the top level of its own repository.
    ///
    /// git resolves `-C <dir>` upwards, so a plain directory inside another
    /// repository would otherwise have that repository patched and reset.
    pub fn require_checkout_repository(&self) -> anyhow::Result<()> {
        let checkout = self.checkout();
        if !checkout.exists() {
            anyhow::bail!(
                "checkout {} does not exist. Run `srcpatch sync` first.",
                checkout.path().display()
            );
        }

        let not_a_repository = || PatchError::NotAGitRepo {
            path: checkout.path().to_path_buf(),
        };
        if !checkout.is_git_repository() {
            return Err(not_a_repository().into());
        }

        let toplevel = self.git().toplevel()?;
        if !toplevel.success() || !checkout.is_toplevel(Path::new(toplevel.stdout().trim())) {
            tracing::debug!(
                toplevel = toplevel.stdout().trim(),
                stderr = toplevel.stderr().trim(),
                "checkout is not a repository root"
            );
            return Err(not_a_repository().into());
        }

        Ok(())
    }
}
