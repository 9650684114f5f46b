#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn newpost_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("newpost"));
    cmd.env_remove("EDITOR");
    cmd
}

fn posts_in(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "rst"))
        .collect()
}

#[test]
fn test_creates_post_in_given_directory() {
    let temp = TempDir::new().unwrap();

    newpost_cmd()
        .arg(temp.path())
        .arg("--no-editor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Post created"));

    let posts = posts_in(temp.path());
    assert_eq!(posts.len(), 1);

    let content = fs::read_to_string(&posts[0]).unwrap();
    let stem = posts[0].file_stem().unwrap().to_str().unwrap();
    assert!(content.starts_with(":date: "));
    assert!(content.ends_with(&format!(":uuid: {}\n", stem)));
}

#[test]
fn test_defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();

    newpost_cmd()
        .current_dir(temp.path())
        .arg("--no-editor")
        .assert()
        .success();

    assert_eq!(posts_in(temp.path()).len(), 1);
}

#[test]
fn test_json_output_describes_post() {
    let temp = TempDir::new().unwrap();

    let output = newpost_cmd()
        .arg(temp.path())
        .args(["--no-editor", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let path = PathBuf::from(value["path"].as_str().unwrap());
    assert!(path.exists());
    assert_eq!(
        path.file_stem().unwrap().to_str().unwrap(),
        value["id"].as_str().unwrap()
    );
    assert_eq!(value["date"].as_str().unwrap().len(), "YYYY-MM-DD".len());
}

#[test]
fn test_missing_directory_fails_without_side_effects() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");

    newpost_cmd()
        .arg(&missing)
        .arg("--no-editor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));

    assert!(!missing.exists());
    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_regular_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("notes.txt");
    fs::write(&file, "hello").unwrap();

    newpost_cmd()
        .arg(&file)
        .arg("--no-editor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));

    assert!(posts_in(temp.path()).is_empty());
}

#[test]
fn test_editor_arg_requires_editor() {
    let temp = TempDir::new().unwrap();

    newpost_cmd()
        .arg(temp.path())
        .args(["--editor-arg", "--wait"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --editor"));

    assert!(posts_in(temp.path()).is_empty());
}

#[test]
fn test_failed_launch_keeps_post() {
    let temp = TempDir::new().unwrap();

    newpost_cmd()
        .arg(temp.path())
        .args(["--editor", "newpost-no-such-editor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to launch editor"));

    assert_eq!(posts_in(temp.path()).len(), 1);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();

    newpost_cmd()
        .arg(temp.path())
        .args(["--no-editor", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("post created"));
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn test_explicit_true_editor() {
        let temp = TempDir::new().unwrap();

        newpost_cmd()
            .arg(temp.path())
            .args(["--editor", "true"])
            .assert()
            .success();

        assert_eq!(posts_in(temp.path()).len(), 1);
    }

    #[test]
    fn test_editor_from_environment() {
        let temp = TempDir::new().unwrap();

        newpost_cmd()
            .env("EDITOR", "true")
            .current_dir(temp.path())
            .assert()
            .success();

        assert_eq!(posts_in(temp.path()).len(), 1);
    }

    /// Runs newpost from inside a directory that is removed just before exec.
    fn newpost_in_deleted_cwd(args: &[&Path]) -> (TempDir, Command) {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("gone");
        fs::create_dir(&gone).unwrap();

        let mut cmd = Command::new("sh");
        cmd.env_remove("EDITOR")
            .arg("-c")
            .arg(r#"cd "$1" && rmdir "$1" && shift && exec "$@" --no-editor"#)
            .arg("sh")
            .arg(&gone)
            .arg(cargo_bin("newpost"))
            .args(args);
        (temp, cmd)
    }

    #[test]
    fn test_explicit_directory_works_from_deleted_cwd() {
        let target = TempDir::new().unwrap();

        let (_parent, mut cmd) = newpost_in_deleted_cwd(&[target.path()]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Post created"));

        assert_eq!(posts_in(target.path()).len(), 1);
    }

    #[test]
    fn test_deleted_cwd_without_directory_is_invalid() {
        let (_parent, mut cmd) = newpost_in_deleted_cwd(&[]);
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid directory"));
    }

    #[test]
    fn test_editor_receives_args_then_path() {
        let temp = TempDir::new().unwrap();
        let posts = temp.path().join("posts");
        fs::create_dir(&posts).unwrap();
        let record = temp.path().join("argv.txt");
        let script = format!(r#"printf '%s\n' "$0" "$@" > '{}'"#, record.display());

        newpost_cmd()
            .arg(&posts)
            .args(["--editor", "sh", "--editor-arg", "-c"])
            .arg("--editor-arg")
            .arg(&script)
            .args(["--editor-arg", "--wait"])
            .assert()
            .success();

        let post = posts_in(&posts).pop().unwrap();
        let recorded = fs::read_to_string(&record).unwrap();
        let lines: Vec<&str> = recorded.lines().collect();
        assert_eq!(lines, vec!["--wait", post.to_str().unwrap()]);
    }
}
