//! # ShellRS Remove-Directory Command
//!
//! File: cli/src/commands/rmdir.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs rmdir [-e] <path>...`.
//!
//! Default mode removes each path only if the OS agrees it is empty —
//! `fs::remove_dir` enforces that, so no check-then-remove race exists.
//!
//! With `-e/--empty-dirs` the command instead *prunes*: each path's subtree
//! is walked bottom-up deleting every directory left empty after its
//! children are processed, then the path itself is removed and the walk
//! continues upward, deleting each now-empty ancestor until one refuses
//! (non-empty, permission-denied, or the root). The pruning mode is
//! deliberately silent and always succeeds: it is a cleanup sweep, and
//! "nothing left to prune" and "could not prune further" are the same
//! outcome for a build script.
//!
use crate::common::fs::remove;
use crate::core::error::{Result, EFAIL, EOK};
use crate::core::options::Invocation;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Handler for `rmdir`.
pub fn run(inv: &Invocation) -> Result<i32> {
    for arg in &inv.args {
        let path = Path::new(arg);
        if !inv.options.remove_empty_dirs {
            if let Err(err) = fs::remove_dir(path) {
                debug!("rmdir {} failed: {err}", path.display());
                if inv.options.force {
                    continue;
                }
                eprintln!("Can not remove directory {arg}");
                return Ok(EFAIL);
            }
        } else if path.is_dir() {
            // Prune empty subtrees, then climb: the first ancestor that
            // refuses removal ends the sweep silently.
            let swept = remove::prune_empty_dirs(path)
                .and_then(|()| remove::remove_empty_ancestors(path));
            if let Err(err) = swept {
                debug!("empty-dir sweep of {} stopped: {err}", path.display());
            }
        }
    }
    Ok(EOK)
}
