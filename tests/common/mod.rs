#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn darkwrite_cmd() -> Command {
    let mut cmd = Command::cargo_bin("darkwrite").unwrap();
    cmd.env_remove("DARKWRITE_ROOT");
    cmd.env_remove("DARKWRITE_LOG");
    cmd
}

/// Initialize a workspace at `root`
pub fn init_workspace(root: &Path) {
    darkwrite_cmd().arg("init").arg(root).assert().success();
}

/// Create a post through the CLI and return its id
pub fn create_post(root: &Path, args: &[&str]) -> String {
    let output = darkwrite_cmd()
        .current_dir(root)
        .arg("new")
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "new failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Created post ")
        .unwrap_or_else(|| panic!("unexpected output: {}", stdout))
        .to_string()
}

pub fn store_path(root: &Path) -> std::path::PathBuf {
    root.join(".darkwrite").join("darkwrite-posts.json")
}
