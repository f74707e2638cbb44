#![allow(dead_code)]


const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

// Lines of a command's stdout, for order-sensitive assertions
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// True if some output line reports `label` for `patch`, e.g. `applied  a.patch`.
pub fn reports(lines: &[String], label: &str, patch: &str) -> bool {
    lines.iter().any(|line| {
        line.starts_with(label) && line.split_whitespace().nth(1) == Some(patch)
    })
}
