//! Shared test helpers for sheaf integration tests.
//!
//! All tests run against temp directories — no side effects outside them.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Create a temp directory populated with the given (relative path, content)
/// pairs. Parent directories are created as needed.
pub fn setup_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for (rel, content) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(&path, content).expect("failed to write fixture file");
    }
    dir
}

/// Run the sheaf binary in `dir` with the given args.
#[allow(dead_code)]
pub fn sheaf_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sheaf"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run sheaf binary")
}

/// Run the sheaf binary in `dir` and assert success, returning stdout.
#[allow(dead_code)]
pub fn sheaf_ok(dir: &Path, args: &[&str]) -> String {
    let out = sheaf_in(dir, args);
    assert!(
        out.status.success(),
        "sheaf {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}
