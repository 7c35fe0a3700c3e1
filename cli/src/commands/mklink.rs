//! # ShellRS Make-Symlink Command
//!
//! File: cli/src/commands/mklink.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs mklink [-D] <link> <target>`, named after the
//! Windows builtin it replaces in build scripts. The target's separators
//! are rewritten to the native style before the link is created. Directory
//! link semantics (relevant on Windows) apply when `-D` is passed or the
//! target is an existing directory.
//!
//! This is a single-shot operation: a refused creation prints one
//! diagnostic (suppressed and reported as success under `-f`) and there is
//! no loop to abort.
//!
use crate::common::fs::links;
use crate::core::error::{Result, EFAIL, EINVAL, EOK};
use crate::core::options::Invocation;
use std::path::Path;
use tracing::debug;

/// Handler for `mklink`.
pub fn run(inv: &Invocation) -> Result<i32> {
    if inv.args.len() < 2 {
        eprintln!("Invalid parameter");
        return Ok(EINVAL);
    }
    let link = Path::new(&inv.args[0]);
    let target = links::to_native_separators(&inv.args[1]);
    let target = Path::new(&target);

    let directory = inv.options.symlinkd || target.is_dir();
    if let Err(err) = links::make_symlink(target, link, directory) {
        debug!("mklink {} -> {} failed: {err}", link.display(), target.display());
        if inv.options.force {
            return Ok(EOK);
        }
        eprintln!(
            "Can not create symbolic link: {} -> {}",
            link.display(),
            target.display()
        );
        return Ok(EFAIL);
    }
    Ok(EOK)
}
