use crate::common::command::{checkout_path, checkout_state, checkout_workspace, run_srcpatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn empty_patches_directory_applies_nothing(
    checkout_workspace: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = checkout_workspace.path();
    let checkout = checkout_path(workspace);
    write_file(FileSpec::new(
        workspace.join("patches").join("README.md"),
        "patches go here\n".to_string(),
    ));
    let before = checkout_state(&checkout);

    run_srcpatch_command(workspace, &["apply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No patch files found in the"));

    assert_eq!(checkout_state(&checkout), before);

    Ok(())
}
