//! # ShellRS Version-Compare Command
//!
//! File: cli/src/commands/cmpver.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs cmpver <a> <b>`: compares two dot-separated version
//! strings as 4-tuples of integers. Shorter versions are padded with
//! zeros, longer ones truncated to four components, so `1.2` and `1.2.0.0`
//! are equal.
//!
//! The verdict is printed as one character (`+` greater, `0` equal, `-`
//! less, no newline) and doubled into the exit status: 1 for `+`, 0 for
//! `0`, 2 for `-` — so makefiles can branch on the status alone. Malformed
//! or missing input prints "Invalid arguments" to stderr with empty output
//! and the invalid-argument status. Under `-f` the exit status is always
//! 0; the printed character still tells the truth.
//!
use crate::core::error::{Result, EINVAL, EOK};
use crate::core::options::Invocation;
use std::cmp::Ordering;

/// Parses a version string into its first four numeric components,
/// zero-padded.
fn parse_version(version: &str) -> Option<[i64; 4]> {
    let padded = format!("{version}.0.0.0");
    let mut components = [0i64; 4];
    for (slot, part) in components.iter_mut().zip(padded.split('.').take(4)) {
        *slot = part.trim().parse().ok()?;
    }
    Some(components)
}

/// Compares two version strings: the printed symbol and the exit status.
fn compare(a: &str, b: &str) -> Option<(i32, &'static str)> {
    let left = parse_version(a)?;
    let right = parse_version(b)?;
    Some(match left.cmp(&right) {
        Ordering::Greater => (1, "+"),
        Ordering::Equal => (EOK, "0"),
        Ordering::Less => (2, "-"),
    })
}

/// Handler for `cmpver`.
pub fn run(inv: &Invocation) -> Result<i32> {
    let verdict = match (inv.args.first(), inv.args.get(1)) {
        (Some(a), Some(b)) => compare(a, b),
        _ => None,
    };
    let (status, symbol) = match verdict {
        Some(result) => result,
        None => {
            eprintln!("Invalid arguments");
            (EINVAL, "")
        }
    };
    print!("{symbol}");
    Ok(if inv.options.force { EOK } else { status })
}
