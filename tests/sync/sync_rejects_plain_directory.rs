use crate::common::command::{run_srcpatch_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn sync_rejects_plain_directory(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("src").join("notes.txt"),
        "not a repository".to_string(),
    ));

    run_srcpatch_command(workspace_dir.path(), &["sync"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a git repository"));

    Ok(())
}
