//! # ShellRS Remove Command
//!
//! File: cli/src/commands/rm.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs rm [-r] [-f] [--args-from-stdin] <pattern>...`.
//! Each pattern is glob-expanded; files and symlinks are unlinked,
//! directories are removed (whole subtree with `-r`, empty-only without),
//! and anything unclassifiable — a broken Windows junction, say — goes
//! through the plain file-delete path, which is the one that works on it.
//!
//! ## Workflow
//!
//! 1. Gather patterns: the positional arguments or, with
//!    `--args-from-stdin`, quote-aware tokens lexed from each stdin line.
//! 2. Expand each pattern. An empty match is a failure ("Can not find
//!    file") unless forced.
//! 3. Remove each match per its type. A refused removal is a failure
//!    ("Can not remove ...") unless forced.
//!
//! Under `-f` every failure is silent, the loop keeps going, and the final
//! status is 0. Without it, the first failure prints one diagnostic and
//! ends the run with the generic failure status.
//!
use crate::common::fs::{glob, remove};
use crate::core::error::{Result, ShellError, EFAIL, EOK};
use crate::core::options::Invocation;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::debug;

/// Removes one matched entry according to its type.
fn remove_entry(path: &Path, recursive: bool) -> io::Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_symlink() || file_type.is_file() {
        fs::remove_file(path)
    } else if file_type.is_dir() {
        if recursive {
            remove::remove_tree(path)
        } else {
            fs::remove_dir(path)
        }
    } else {
        // A bad junction or other oddity: the file-delete path handles it.
        fs::remove_file(path)
    }
}

/// Collects the patterns to remove: positional arguments, or shell-lexed
/// tokens from stdin with `--args-from-stdin`.
fn collect_patterns(inv: &Invocation) -> Result<Vec<String>> {
    if !inv.options.args_from_stdin {
        return Ok(inv.args.clone());
    }
    let mut patterns = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line
            .map_err(|e| ShellError::OperationFailed(format!("Can not read stdin: {e}")))?;
        let tokens = shlex::split(&line).ok_or_else(|| {
            ShellError::InvalidArguments(format!("Unbalanced quoting in stdin arguments: {line}"))
        })?;
        patterns.extend(tokens);
    }
    Ok(patterns)
}

/// Handler for `rm`.
pub fn run(inv: &Invocation) -> Result<i32> {
    let force = inv.options.force;
    let recursive = inv.options.recursive;

    for pattern in collect_patterns(inv)? {
        let matches = glob::expand(&pattern);
        if matches.is_empty() {
            if force {
                continue;
            }
            eprintln!("Can not find file {pattern}");
            return Ok(EFAIL);
        }
        for path in matches {
            if let Err(err) = remove_entry(&path, recursive) {
                debug!("removal of {} failed: {err}", path.display());
                if force {
                    continue;
                }
                if recursive && path.is_dir() {
                    eprintln!("Can not remove tree {}", path.display());
                } else {
                    eprintln!("Can not remove file {}", path.display());
                }
                return Ok(EFAIL);
            }
        }
    }
    Ok(EOK)
}
