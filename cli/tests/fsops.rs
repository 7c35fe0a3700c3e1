//! # ShellRS CLI Filesystem Operation Integration Tests
//!
//! File: cli/tests/fsops.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Integration tests for the mutating commands (`rm`, `mkdir`, `rmdir`,
//! `mv`, `cp`, `touch`), driven through the compiled binary with a
//! temporary directory as the working directory so relative globs behave
//! exactly as they do in a build script.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// `rm -f` on a pattern matching nothing: exit 0, no output at all.
#[test]
fn test_rm_force_missing_is_silent_success() {
    let dir = tempdir().expect("tempdir");
    shellrs_cmd()
        .current_dir(dir.path())
        .args(["rm", "-f", "nonexistent.txt"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

/// `rm` without force on a missing pattern: exit 1 and a diagnostic
/// naming the pattern.
#[test]
fn test_rm_missing_reports_pattern() {
    let dir = tempdir().expect("tempdir");
    shellrs_cmd()
        .current_dir(dir.path())
        .args(["rm", "nonexistent.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("find file").and(predicate::str::contains("nonexistent.txt")));
}

/// `rm` expands globs and removes every match.
#[test]
fn test_rm_glob() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.o"), "").unwrap();
    fs::write(dir.path().join("b.o"), "").unwrap();
    fs::write(dir.path().join("keep.c"), "").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["rm", "*.o"])
        .assert()
        .success();
    assert!(!dir.path().join("a.o").exists());
    assert!(!dir.path().join("b.o").exists());
    assert!(dir.path().join("keep.c").exists());
}

/// `rm -r` takes a whole subtree.
#[test]
fn test_rm_recursive_tree() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("build/objs")).unwrap();
    fs::write(dir.path().join("build/objs/a.o"), "").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["rm", "-r", "build"])
        .assert()
        .success();
    assert!(!dir.path().join("build").exists());
}

/// `rm --args-from-stdin` lexes quoted tokens from standard input.
#[test]
fn test_rm_args_from_stdin() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("plain.txt"), "").unwrap();
    fs::write(dir.path().join("with space.txt"), "").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["--args-from-stdin", "rm"])
        .write_stdin("plain.txt 'with space.txt'\n")
        .assert()
        .success();
    assert!(!dir.path().join("plain.txt").exists());
    assert!(!dir.path().join("with space.txt").exists());
}

/// `mkdir` creates chains and is idempotent: both runs exit 0.
#[test]
fn test_mkdir_idempotent() {
    let dir = tempdir().expect("tempdir");
    for _ in 0..2 {
        shellrs_cmd()
            .current_dir(dir.path())
            .args(["mkdir", "a/b/c"])
            .assert()
            .success();
    }
    assert!(dir.path().join("a/b/c").is_dir());
}

/// `rmdir` removes empty directories only.
#[test]
fn test_rmdir_empty_only() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("empty")).unwrap();
    fs::create_dir(dir.path().join("full")).unwrap();
    fs::write(dir.path().join("full/f.txt"), "").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["rmdir", "empty"])
        .assert()
        .success();
    assert!(!dir.path().join("empty").exists());

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["rmdir", "full"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("full"));
}

/// `rmdir -e` folds away empty subtrees and climbing ancestors.
#[test]
fn test_rmdir_empty_dirs_sweep() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("base/out/objs")).unwrap();
    fs::write(dir.path().join("base/keep.txt"), "").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["rmdir", "-e", "base/out"])
        .assert()
        .success();
    assert!(!dir.path().join("base/out").exists());
    assert!(dir.path().join("base/keep.txt").exists());
}

/// `mv` of several matches requires a directory destination.
#[test]
fn test_mv_multi_into_directory() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.log"), "a").unwrap();
    fs::write(dir.path().join("b.log"), "b").unwrap();
    fs::create_dir(dir.path().join("logs")).unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["mv", "*.log", "logs"])
        .assert()
        .success();
    assert!(dir.path().join("logs/a.log").exists());
    assert!(dir.path().join("logs/b.log").exists());

    fs::write(dir.path().join("c.log"), "c").unwrap();
    fs::write(dir.path().join("d.log"), "d").unwrap();
    shellrs_cmd()
        .current_dir(dir.path())
        .args(["mv", "*.log", "logs/a.log"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

/// `cp` of N>1 matches to a non-directory destination fails and copies
/// nothing.
#[test]
fn test_cp_multi_to_non_directory_fails() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.h"), "a").unwrap();
    fs::write(dir.path().join("b.h"), "b").unwrap();
    fs::write(dir.path().join("plain.txt"), "").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["cp", "*.h", "plain.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
    assert_eq!(fs::read_to_string(dir.path().join("plain.txt")).unwrap(), "");
}

/// `cp -r` copies a tree, merging into an existing destination.
#[test]
fn test_cp_recursive_merge() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("src/inner")).unwrap();
    fs::write(dir.path().join("src/inner/deep.txt"), "deep").unwrap();
    fs::create_dir_all(dir.path().join("out/src")).unwrap();
    fs::write(dir.path().join("out/src/old.txt"), "old").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["cp", "-r", "src", "out"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("out/src/inner/deep.txt")).unwrap(),
        "deep"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("out/src/old.txt")).unwrap(),
        "old"
    );
}

/// A single `cp` argument copies into the working directory.
#[test]
fn test_cp_single_argument_defaults_to_cwd() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/artifact.bin"), "bits").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["cp", "sub/artifact.bin"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("artifact.bin")).unwrap(),
        "bits"
    );
}

/// `touch` creates missing files at the literal pattern path.
#[test]
fn test_touch_creates_and_stamps() {
    let dir = tempdir().expect("tempdir");
    shellrs_cmd()
        .current_dir(dir.path())
        .args(["touch", "stamp.built"])
        .assert()
        .success();
    assert!(dir.path().join("stamp.built").is_file());

    // Second touch of the same (now existing) file still succeeds.
    shellrs_cmd()
        .current_dir(dir.path())
        .args(["touch", "stamp.built"])
        .assert()
        .success();
}

/// `mklink` creates a working symlink (Unix: always available).
#[cfg(unix)]
#[test]
fn test_mklink_roundtrip() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("target.txt"), "linked").unwrap();

    shellrs_cmd()
        .current_dir(dir.path())
        .args(["mklink", "alias", "target.txt"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("alias")).unwrap(),
        "linked"
    );
}
