// Integration tests for the post scaffolder.
//
// Each test runs the real binary inside a fresh temporary directory acting
// as the site root. `--no-edit` is passed everywhere so the tests never
// spawn an editor.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use tempfile::TempDir;

fn post_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("post").unwrap();
    cmd.current_dir(root.path()).arg("--no-edit");
    cmd
}

/// Expected relative target path for a slug created today.
fn expected_relative(slug: &str) -> PathBuf {
    let today = Local::now().date_naive();
    PathBuf::from("content/blog")
        .join(today.format("%Y").to_string())
        .join(today.format("%m").to_string())
        .join(format!("{slug}.md"))
}

#[test]
fn creates_post_with_recursive_directories() {
    let root = TempDir::new().unwrap();
    let relative = expected_relative("my-awesome-post");

    // Neither content/ nor the year/month directories exist yet.
    post_cmd(&root)
        .arg("my-awesome-post")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: "))
        .stdout(predicate::str::contains("draft: false"));

    let content = fs::read_to_string(root.path().join(&relative)).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("title: \"My Awesome Post\"\n"));
    assert!(content.contains("description: \"\"\n"));
    assert!(content.contains("draft: true\n"));
    assert!(content.contains("\n# My Awesome Post\n"));
}

#[test]
fn emitted_file_matches_contract_exactly() {
    let root = TempDir::new().unwrap();

    post_cmd(&root).arg("hello").assert().success();

    // The date is re-derived here; a run across midnight would re-create
    // the file in a different directory and fail the read, which is an
    // acceptable flake for a test this fast.
    let today = Local::now().date_naive();
    let content = fs::read_to_string(root.path().join(expected_relative("hello"))).unwrap();
    assert_eq!(
        content,
        format!(
            "---\n\
             title: \"Hello\"\n\
             description: \"\"\n\
             pubDate: {}\n\
             draft: true\n\
             ---\n\
             \n\
             # Hello\n\
             \n",
            today.format("%Y-%m-%d")
        )
    );
}

#[test]
fn second_invocation_conflicts_and_leaves_file_untouched() {
    let root = TempDir::new().unwrap();
    let target = root.path().join(expected_relative("repeat"));

    post_cmd(&root).arg("repeat").assert().success();
    let first_content = fs::read_to_string(&target).unwrap();

    post_cmd(&root)
        .args(["repeat", "A Different Title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post already exists"))
        .stderr(predicate::str::contains("repeat.md"));

    // The conflicting run must not have modified the original.
    assert_eq!(fs::read_to_string(&target).unwrap(), first_content);
}

#[test]
fn explicit_title_is_used_verbatim() {
    let root = TempDir::new().unwrap();

    post_cmd(&root)
        .args(["some-slug", "a lowercase title"])
        .assert()
        .success();

    let content = fs::read_to_string(root.path().join(expected_relative("some-slug"))).unwrap();
    assert!(content.contains("title: \"a lowercase title\"\n"));
    assert!(content.contains("# a lowercase title\n"));
}

#[test]
fn missing_slug_is_a_usage_error_with_no_side_effects() {
    let root = TempDir::new().unwrap();

    Command::cargo_bin("post")
        .unwrap()
        .current_dir(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    // No directories or files were created.
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn invalid_slug_is_rejected_with_no_side_effects() {
    let root = TempDir::new().unwrap();

    post_cmd(&root)
        .arg("bad/slug")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid slug"));

    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn root_flag_overrides_working_directory() {
    let root = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    Command::cargo_bin("post")
        .unwrap()
        .current_dir(elsewhere.path())
        .args(["--no-edit", "--root"])
        .arg(root.path())
        .arg("rooted")
        .assert()
        .success();

    assert!(root.path().join(expected_relative("rooted")).exists());
    assert_eq!(fs::read_dir(elsewhere.path()).unwrap().count(), 0);
}

#[test]
fn config_file_changes_content_directory() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("post.toml"), "content_dir = \"posts\"\n").unwrap();

    post_cmd(&root).arg("configured").assert().success();

    let today = Local::now().date_naive();
    let target = root
        .path()
        .join("posts")
        .join(today.format("%Y").to_string())
        .join(today.format("%m").to_string())
        .join("configured.md");
    assert!(target.exists());
}

#[test]
fn malformed_config_aborts_before_any_write() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("post.toml"), "content_dir = [oops\n").unwrap();

    post_cmd(&root)
        .arg("whatever")
        .assert()
        .failure()
        .stderr(predicate::str::contains("post.toml"));

    // Only the config file itself is present.
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
}
