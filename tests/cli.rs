//! CLI surface tests for overview

use assert_cmd::Command;
use predicates::prelude::*;

use overview::test_utils::TestTree;

fn overview_cmd() -> Command {
    Command::cargo_bin("overview").expect("binary builds")
}

#[test]
fn test_version_flag() {
    overview_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("overview"));
}

#[test]
fn test_help_mentions_artifact() {
    overview_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("proj_structure.txt"));
}

#[test]
fn test_invalid_color_value_rejected() {
    overview_cmd()
        .args(["--color", "sometimes"])
        .assert()
        .failure();
}

#[test]
fn test_color_never_emits_plain_tree() {
    let tree = TestTree::new();
    tree.write_ignore(&[]);
    tree.add_file("a.txt", "");
    tree.add_dir("sub");

    overview_cmd()
        .args(["--color", "never"])
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("├── a.txt"))
        .stdout(predicate::str::contains("├── sub/"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_color_always_emits_escape_codes_for_dirs() {
    let tree = TestTree::new();
    tree.write_ignore(&[]);
    tree.add_dir("sub");

    overview_cmd()
        .args(["--color", "always"])
        .env("TERM", "xterm-256color")
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    let tree = TestTree::new();

    overview_cmd()
        .arg("missing_dir")
        .current_dir(tree.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access 'missing_dir'"));
}
