//! # ShellRS Fix-Symlink Command
//!
//! File: cli/src/commands/fix_symlink.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs fix-symlink <pattern>...`, the janitor for symlinks
//! that cross the Windows/WSL boundary. Each pattern is walked recursively
//! (a directory match expands to `<dir>/*`), and every entry is inspected:
//!
//! - On WSL, every symlink is destructively rebuilt — read target, delete,
//!   recreate — normalizing the on-disk representation so links made by
//!   Windows tools work from Linux and vice versa.
//! - On a native filesystem, an entry that is neither a valid link nor a
//!   regular file is a broken link (a dead `<JUNCTION>`, typically). The
//!   repair searches sibling files sharing the entry's stem (`<stem>.*`)
//!   for a real file and relinks to its basename.
//!
//! Any OS error prints one "Can not fix the bad symbolic link" diagnostic
//! and aborts with the generic failure status; `-f` does not soften this
//! command.
//!
use crate::common::fs::{glob, links};
use crate::common::system;
use crate::core::error::{Result, EFAIL, EOK};
use crate::core::options::Invocation;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Inspects and, when needed, rebuilds or repairs one non-directory entry.
fn fix_entry(file: &Path, on_wsl: bool) -> io::Result<()> {
    let is_link = fs::symlink_metadata(file)?.file_type().is_symlink();
    if is_link && on_wsl {
        links::rebuild_link(file)?;
    } else if !is_link && !file.is_file() {
        // Dead link: look for a sibling real file with the same stem and
        // relink to its basename.
        let pattern = file.with_extension("*");
        for candidate in glob::expand(&pattern.display().to_string()) {
            if fs::symlink_metadata(&candidate)?.is_file() {
                debug!(
                    "relinking {} -> {}",
                    file.display(),
                    candidate.display()
                );
                fs::remove_file(file)?;
                let name = candidate.file_name().unwrap_or_default();
                links::make_symlink(Path::new(name), file, false)?;
                break;
            }
        }
    }
    Ok(())
}

/// Walks one pattern, recursing into matched directories.
fn walk(pattern: &str, on_wsl: bool) -> io::Result<()> {
    for file in glob::expand(pattern) {
        if file.is_dir() {
            walk(&format!("{}/*", file.display()), on_wsl)?;
            continue;
        }
        if let Err(err) = fix_entry(&file, on_wsl) {
            eprintln!("Can not fix the bad symbolic link {}", file.display());
            return Err(err);
        }
    }
    Ok(())
}

/// Handler for `fix-symlink`.
pub fn run(inv: &Invocation) -> Result<i32> {
    let on_wsl = system::is_wsl();
    for pattern in &inv.args {
        if walk(pattern, on_wsl).is_err() {
            return Ok(EFAIL);
        }
    }
    Ok(EOK)
}
