//! # ShellRS Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Wrappers around `std::process::Command` for running a caller-assembled
//! shell command line. The one consumer today is `cargo-exec`, which joins
//! its remaining arguments into a single line and hands it to the platform
//! shell with extra environment variables injected into the child only —
//! the parent environment is never mutated, so nothing leaks across
//! invocations.
//!
//! ## Architecture
//!
//! - `run_shell_line`: spawns `sh -c <line>` (or `cmd /C <line>` on
//!   Windows), waits for completion, and maps the exit status to the small
//!   integer the dispatcher returns. A child killed by a signal has no exit
//!   code; that is reported as the generic failure status.
//!
use crate::core::error::{Result, EFAIL};
use anyhow::Context;
use std::process::Command;
use tracing::{debug, info};

/// Runs `line` through the platform shell with `envs` added to the child
/// environment, blocking until it finishes.
///
/// # Returns
///
/// The child's exit status, or `EFAIL` if it terminated without one
/// (killed by a signal).
///
/// # Errors
///
/// Returns an `Err` only when the shell itself cannot be spawned.
pub fn run_shell_line(line: &str, envs: &[(&str, String)]) -> Result<i32> {
    info!("executing shell line: {line}");

    #[cfg(windows)]
    let mut command = {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(line);
        c
    };
    #[cfg(not(windows))]
    let mut command = {
        let mut c = Command::new("sh");
        c.arg("-c").arg(line);
        c
    };

    for (key, value) in envs {
        command.env(key, value);
    }

    let status = command
        .status()
        .with_context(|| format!("Failed to execute shell line: {line}"))?;
    debug!("shell line finished with {status}");
    Ok(status.code().unwrap_or(EFAIL))
}
