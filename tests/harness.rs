//! Test harness for overview integration tests

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub use overview::test_utils::TestTree;

/// Run the built binary in `dir` with `args`, feeding `stdin_data` to its
/// stdin. Returns (stdout, stderr, success).
pub fn run_overview(dir: &Path, args: &[&str], stdin_data: &str) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_overview");
    let mut child = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run overview");

    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(stdin_data.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait on overview");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_harness_write_ignore() {
        let tree = TestTree::new();
        let path = tree.write_ignore(&["build"]);
        assert!(path.exists());
    }
}
