use crate::common::command::{
    CHECKOUT, git_commit_all, run_git_command, run_srcpatch_command, workspace_dir, write_patch,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

const HELLO_PATCH: &str = "\
diff --git a/hello.txt b/hello.txt
--- a/hello.txt
+++ b/hello.txt
@@ -1 +1 @@
-hello
+patched
";

#[rstest]
fn plain_checkout_inside_outer_repository_is_rejected(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = workspace_dir.path();
    let checkout = workspace.join(CHECKOUT);

    // the workspace itself is a repository, `src/` is just a directory in it
    run_git_command(workspace, &["init", "--quiet"])
        .assert()
        .success();
    write_file(FileSpec::new(workspace.join("notes.txt"), "v1\n".to_string()));
    write_file(FileSpec::new(checkout.join("hello.txt"), "hello\n".to_string()));
    git_commit_all(workspace, "Outer commit");

    write_file(FileSpec::new(
        workspace.join("notes.txt"),
        "UNCOMMITTED WORK\n".to_string(),
    ));
    write_patch(workspace, "x.patch", HELLO_PATCH);

    for command in ["apply", "check"] {
        run_srcpatch_command(workspace, &[command])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("is not a git repository"));
    }

    assert_eq!(read_file(&workspace.join("notes.txt")), "UNCOMMITTED WORK\n");
    assert_eq!(read_file(&checkout.join("hello.txt")), "hello\n");

    Ok(())
}
