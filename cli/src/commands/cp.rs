//! # ShellRS Copy Command
//!
//! File: cli/src/commands/cp.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs cp [-r] [-P] <pattern>... [dst]`. Source patterns
//! pool like `mv`; a single argument copies into the current directory.
//! Regular files copy with their modification time; with
//! `-P/--no-dereference` a symlink source is duplicated as a link instead
//! of materialized. Directories copy recursively with `-r`, merging into a
//! pre-existing destination tree.
//!
//! Entries that are neither regular files nor (with `-r`) directories are
//! skipped without comment — matching a glob is not a promise that every
//! match is copyable.
//!
use crate::common::fs::copy::{copy_entry, copy_tree};
use crate::common::fs::glob;
use crate::core::error::{Result, EFAIL, EOK};
use crate::core::options::Invocation;
use std::io;
use std::path::Path;
use tracing::debug;

/// Copies one pooled match according to its type.
fn copy_one(file: &Path, dst: &Path, recursive: bool, follow_symlinks: bool) -> io::Result<()> {
    if file.is_file() {
        copy_entry(file, dst, follow_symlinks)
    } else if recursive && file.is_dir() {
        let into = dst.join(file.file_name().unwrap_or_default());
        copy_tree(file, &into, follow_symlinks)
    } else {
        Ok(())
    }
}

/// Handler for `cp`.
pub fn run(inv: &Invocation) -> Result<i32> {
    if inv.args.is_empty() {
        eprintln!("Invalid parameter [] for cp");
        return Ok(EFAIL);
    }
    // A single argument copies into the current directory.
    let mut args = inv.args.clone();
    if args.len() == 1 {
        args.push(".".to_string());
    }
    let (patterns, dst) = args.split_at(args.len() - 1);
    let dst = Path::new(&dst[0]);

    let files = glob::expand_all(patterns);
    if files.len() > 1 && !dst.is_dir() {
        eprintln!("{} is not a directory", dst.display());
        return Ok(EFAIL);
    }
    if files.is_empty() {
        if inv.options.force {
            return Ok(EOK);
        }
        eprintln!("Can not find file {}", patterns[patterns.len() - 1]);
        return Ok(EFAIL);
    }

    for file in files {
        if let Err(err) = copy_one(&file, dst, inv.options.recursive, inv.options.follow_symlinks)
        {
            debug!("copy of {} failed: {err}", file.display());
            if inv.options.force {
                continue;
            }
            eprintln!("Can not copy {} to {}", file.display(), dst.display());
            return Ok(EFAIL);
        }
    }
    Ok(EOK)
}
