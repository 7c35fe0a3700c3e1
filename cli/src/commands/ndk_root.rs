//! # ShellRS NDK-Root Command
//!
//! File: cli/src/commands/ndk_root.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs ndk-root`: prints the root of the newest usable
//! Android NDK install (forward slashes, no trailing newline). Discovery
//! honors `ANDROID_NDK_ROOT`, then scans the SDK as described in
//! `common::system::ndk`. When nothing is found the command exits with the
//! dedicated not-found status (7), which build scripts distinguish from an
//! operational failure.
//!
use crate::common::fs::paths;
use crate::common::system::ndk;
use crate::core::error::{Result, ShellError, EOK};
use crate::core::options::Invocation;

/// Handler for `ndk-root`.
pub fn run(_inv: &Invocation) -> Result<i32> {
    match ndk::discover() {
        Some(root) => {
            print!("{}", paths::normalize_slashes(&root.display().to_string()));
            Ok(EOK)
        }
        // Status 7 lets build scripts distinguish "no NDK installed" from
        // an operational failure.
        None => Ok(ShellError::NotFound("the Android NDK".to_string()).exit_code()),
    }
}
