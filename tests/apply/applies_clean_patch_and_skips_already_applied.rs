use crate::common::command::{
    capture_patch, checkout_path, checkout_workspace, git_commit_all, run_srcpatch_command,
    write_patch,
};
use crate::common::file::{FileSpec, read_file, replace_line, write_file};
use crate::common::{reports, stdout_lines};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn applies_clean_patch_and_skips_already_applied(
    checkout_workspace: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = checkout_workspace.path();
    let checkout = checkout_path(workspace);
    let greeting = "hello\nfrom\nthe\npatched checkout\n".to_string();
    let util = replace_line(&read_file(&checkout.join("lib/util.txt")), 4, "4: rewritten by b");

    let a = capture_patch(&checkout, |dir| {
        write_file(FileSpec::new(dir.join("hello.txt"), greeting.clone()))
    });
    let b = capture_patch(&checkout, |dir| {
        write_file(FileSpec::new(dir.join("lib/util.txt"), util.clone()))
    });

    // b's change lands upstream before the run
    write_file(FileSpec::new(checkout.join("lib/util.txt"), util.clone()));
    git_commit_all(&checkout, "Upstream already has b");

    write_patch(workspace, "a.patch", &a);
    write_patch(workspace, "b.patch", &b);

    let output = run_srcpatch_command(workspace, &["apply"])
        .assert()
        .success()
        .get_output()
        .clone();
    let lines = stdout_lines(&output);

    assert!(reports(&lines, "applied", "a.patch"), "{:#?}", lines);
    assert!(reports(&lines, "skipped", "b.patch"), "{:#?}", lines);
    assert!(lines.contains(&"All applicable patches applied successfully.".to_string()));

    assert_eq!(read_file(&checkout.join("hello.txt")), greeting);
    assert_eq!(read_file(&checkout.join("lib/util.txt")), util);

    Ok(())
}
