//! # ShellRS Windows-Registry Command
//!
//! File: cli/src/commands/winreg.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs winreg <ROOT\sub\key\VALUE>...`: prints the first
//! non-empty registry value found across the queries, or the empty string.
//!
//! On platforms without a registry the command prints nothing and succeeds
//! — build scripts probe the registry unconditionally and interpret an
//! empty answer as "not installed here", so an error status would be
//! noise.
//!
use crate::common::system::registry;
use crate::core::error::{Result, EOK};
use crate::core::options::Invocation;
use tracing::debug;

/// Handler for `winreg`.
pub fn run(inv: &Invocation) -> Result<i32> {
    let value = match registry::read_first_value(&inv.args) {
        Ok(value) => value.unwrap_or_default(),
        // No registry here: an empty answer, not an error.
        Err(err) => {
            debug!("{err}; reporting an empty value");
            String::new()
        }
    };
    print!("{value}");
    Ok(EOK)
}
