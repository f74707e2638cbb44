use crate::artifacts::tools::{Invocation, Runner, ToolOutput};
use derive_new::new;
use std::path::Path;

pub const FETCH: &str = "fetch";
const CAFFEINATE: &str = "caffeinate";

/// depot_tools entry points used to create a checkout from scratch.
#[derive(new)]
pub struct DepotTools<'r> {
    runner: &'r dyn Runner,
}

impl DepotTools<'_> {
    /// `fetch --no-history <config>` inside `base_dir`.
    ///
    /// On macOS the download is wrapped in `caffeinate` when it is available so
    /// the machine stays awake for the duration.
    pub fn fetch_no_history(&self, config: &str, base_dir: &Path) -> anyhow::Result<ToolOutput> {
        let fetch_args = [FETCH, "--no-history", config];

        let invocation = if cfg!(target_os = "macos") && self.runner.locate(CAFFEINATE).is_some()
        {
            Invocation::new(CAFFEINATE).args(fetch_args)
        } else {
            Invocation::new(FETCH).args(&fetch_args[1..])
        };

        self.runner
            .run(&invocation.current_dir(base_dir).passthrough())
    }
}
