//! # ShellRS Timestamp Command
//!
//! File: cli/src/commands/timestamp.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs timestamp`: prints the current Unix time as
//! fractional seconds (microsecond precision), without a trailing newline,
//! for build stamping via command substitution.
//!
use crate::core::error::{Result, EOK};
use crate::core::options::Invocation;
use chrono::Utc;

/// The current Unix time rendered as `<seconds>.<micros>`.
pub fn unix_timestamp() -> String {
    let now = Utc::now();
    format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros())
}

/// Handler for `timestamp`.
pub fn run(_inv: &Invocation) -> Result<i32> {
    print!("{}", unix_timestamp());
    Ok(EOK)
}
