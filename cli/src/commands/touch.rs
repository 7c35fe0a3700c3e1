//! # ShellRS Touch Command
//!
//! File: cli/src/commands/touch.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs touch <pattern>...`. A pattern with matches stamps
//! each matched entry's access and modification times to now (directories
//! included — `filetime` can stamp them on every platform). A pattern with
//! no matches creates an empty file at the literal pattern path, which is
//! how build scripts conjure marker files.
//!
use crate::common::fs::glob;
use crate::core::error::{Result, EFAIL, EOK};
use crate::core::options::Invocation;
use filetime::FileTime;
use std::fs::OpenOptions;
use std::time::SystemTime;
use tracing::debug;

/// Handler for `touch`.
pub fn run(inv: &Invocation) -> Result<i32> {
    for pattern in &inv.args {
        let files = glob::expand(pattern);
        if files.is_empty() {
            // Nothing matched: create the file at the literal path.
            let created = OpenOptions::new()
                .append(true)
                .create(true)
                .open(pattern)
                .map(drop);
            if let Err(err) = created {
                debug!("touch create {pattern} failed: {err}");
                if inv.options.force {
                    continue;
                }
                eprintln!("Can not create file {pattern}");
                return Ok(EFAIL);
            }
        }
        for file in files {
            let now = FileTime::from_system_time(SystemTime::now());
            if let Err(err) = filetime::set_file_times(&file, now, now) {
                debug!("touch {} failed: {err}", file.display());
                if inv.options.force {
                    continue;
                }
                eprintln!("Can not touch file {}", file.display());
                return Ok(EFAIL);
            }
        }
    }
    Ok(EOK)
}
