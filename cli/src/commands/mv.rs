//! # ShellRS Move Command
//!
//! File: cli/src/commands/mv.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs mv <pattern>... <dst>`. All source patterns are
//! glob-expanded into one pool; the last argument is the destination. With
//! more than one match the destination must be an existing directory.
//! Each entry moves via an OS rename, falling back to copy+delete when the
//! rename is refused (cross-device moves).
//!
//! ## Workflow
//!
//! 1. Validate the argument shape (at least one source and a destination).
//! 2. Pool the glob matches; an empty pool is a failure unless forced.
//! 3. Move each entry; per-item failures follow the force contract
//!    (forced: silent, keep going, exit 0; unforced: one diagnostic,
//!    stop, exit 1).
//!
use crate::common::fs::copy::move_path;
use crate::common::fs::glob;
use crate::core::error::{Result, EFAIL, EOK};
use crate::core::options::Invocation;
use std::path::Path;
use tracing::debug;

/// Handler for `mv`.
pub fn run(inv: &Invocation) -> Result<i32> {
    if inv.args.len() < 2 {
        eprintln!("Invalid parameter {:?} for mv", inv.args);
        return Ok(EFAIL);
    }
    let (patterns, dst) = inv.args.split_at(inv.args.len() - 1);
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
        if let Err(err) = move_path(&file, dst) {
            debug!("move of {} failed: {err}", file.display());
            if inv.options.force {
                continue;
            }
            eprintln!("Can not move {} to {}", file.display(), dst.display());
            return Ok(EFAIL);
        }
    }
    Ok(EOK)
}
