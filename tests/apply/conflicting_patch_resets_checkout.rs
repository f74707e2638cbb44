use crate::common::command::{
    capture_patch, checkout_path, checkout_state, checkout_workspace, git_commit_all,
    run_srcpatch_command, write_patch,
};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::reports;
use crate::common::stdout_lines;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn conflicting_patch_resets_checkout(
    checkout_workspace: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = checkout_workspace.path();
    let checkout = checkout_path(workspace);

    let patch = capture_patch(&checkout, |dir| {
        write_file(FileSpec::new(
            dir.join("hello.txt"),
            "hello\nfrom\nour fork of\ncheckout\n".to_string(),
        ))
    });

    // upstream rewrites the same line differently
    let upstream = "hello\nfrom\nupstream's\ncheckout\n".to_string();
    write_file(FileSpec::new(checkout.join("hello.txt"), upstream.clone()));
    git_commit_all(&checkout, "Upstream change");

    write_patch(workspace, "conflict.patch", &patch);
    let before = checkout_state(&checkout);

    let output = run_srcpatch_command(workspace, &["apply"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("fatal:"))
        .stderr(predicate::str::contains("conflict.patch has conflicts"))
        .get_output()
        .clone();
    let lines = stdout_lines(&output);

    assert!(reports(&lines, "conflict", "conflict.patch"), "{:#?}", lines);
    assert!(lines.iter().any(|l| l.contains("hello.txt")), "{:#?}", lines);
    assert!(lines.contains(&"Reverted to previous state.".to_string()));

    assert_eq!(checkout_state(&checkout), before);
    assert_eq!(read_file(&checkout.join("hello.txt")), upstream);

    Ok(())
}
