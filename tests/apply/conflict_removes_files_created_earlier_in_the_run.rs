use crate::common::command::{
    capture_patch, checkout_path, checkout_state, checkout_workspace, git_commit_all,
    run_srcpatch_command, write_patch,
};
use crate::common::file::{FileSpec, read_file, replace_line, write_file};
use crate::common::{reports, stdout_lines};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn conflict_removes_files_created_earlier_in_the_run(
    checkout_workspace: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = checkout_workspace.path();
    let checkout = checkout_path(workspace);

    let adds_file = capture_patch(&checkout, |dir| {
        write_file(FileSpec::new(
            dir.join("nested/deeper/new.txt"),
            "brand new\n".to_string(),
        ));
        write_file(FileSpec::new(
            dir.join("hello.txt"),
            "hello\nfrom\nthe\nextended checkout\n".to_string(),
        ));
    });
    let util = read_file(&checkout.join("lib/util.txt"));
    let conflicting = capture_patch(&checkout, |dir| {
        write_file(FileSpec::new(
            dir.join("lib/util.txt"),
            replace_line(&util, 3, "3: ours"),
        ))
    });

    // upstream rewrites the line the second patch touches
    write_file(FileSpec::new(
        checkout.join("lib/util.txt"),
        replace_line(&util, 3, "3: upstream"),
    ));
    git_commit_all(&checkout, "Upstream change");

    write_patch(workspace, "0001-adds-file.patch", &adds_file);
    write_patch(workspace, "0002-conflict.patch", &conflicting);
    write_file(FileSpec::new(
        checkout.join("scratch.txt"),
        "operator notes\n".to_string(),
    ));
    let before = checkout_state(&checkout);

    let output = run_srcpatch_command(workspace, &["apply"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("0002-conflict.patch has conflicts"))
        .get_output()
        .clone();
    let lines = stdout_lines(&output);

    assert!(reports(&lines, "applied", "0001-adds-file.patch"), "{:#?}", lines);
    assert_eq!(checkout_state(&checkout), before);
    assert!(!checkout.join("nested").exists());
    assert_eq!(read_file(&checkout.join("scratch.txt")), "operator notes\n");

    // without the conflicting patch the first one applies again from scratch
    std::fs::remove_file(workspace.join("patches/0002-conflict.patch"))?;
    let rerun = run_srcpatch_command(workspace, &["apply"])
        .assert()
        .success()
        .get_output()
        .clone();
    let rerun_lines = stdout_lines(&rerun);

    assert!(reports(&rerun_lines, "applied", "0001-adds-file.patch"), "{:#?}", rerun_lines);
    assert_eq!(
        read_file(&checkout.join("nested/deeper/new.txt")),
        "brand new\n"
    );

    Ok(())
}
