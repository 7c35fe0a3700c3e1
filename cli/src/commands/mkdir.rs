//! # ShellRS Make-Directory Command
//!
//! File: cli/src/commands/mkdir.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs mkdir <path>...`: create each directory chain if it
//! does not already exist. Idempotent — an existing directory is success.
//!
//! Parallel builds routinely race several jobs into creating the same
//! output directory. Rather than locking, creation tolerates the race: if
//! the chain "already exists" but does not yet look like a directory, the
//! attempt is retried after ~1 ms, up to 100 times, before the path is
//! declared unusable.
//!
use crate::core::error::{Result, EFAIL, EOK};
use crate::core::options::Invocation;
use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Attempts bounded by the creation-race retry loop.
const CREATE_ATTEMPTS: u32 = 100;
/// Pause between retries.
const RETRY_DELAY: Duration = Duration::from_millis(1);

/// Creates one directory chain, tolerating a concurrent creator.
fn create_dir_chain(path: &Path) -> bool {
    for _ in 0..CREATE_ATTEMPTS {
        if path.is_dir() {
            return true;
        }
        match fs::create_dir_all(path) {
            Ok(()) => return true,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                if path.is_dir() {
                    return true;
                }
                // Another process is mid-creation (or a non-directory sits
                // there transiently); give it a moment and look again.
                debug!("{} exists but is not a directory yet; retrying", path.display());
                thread::sleep(RETRY_DELAY);
            }
            Err(err) => {
                debug!("mkdir {} failed: {err}", path.display());
                return false;
            }
        }
    }
    false
}

/// Handler for `mkdir`.
pub fn run(inv: &Invocation) -> Result<i32> {
    for path in &inv.args {
        if !create_dir_chain(Path::new(path)) {
            if inv.options.force {
                continue;
            }
            eprintln!("Can not make directory {path}");
            return Ok(EFAIL);
        }
    }
    Ok(EOK)
}
