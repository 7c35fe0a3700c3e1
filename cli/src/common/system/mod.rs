//! # ShellRS System Inspection Utilities (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Host-environment lookups that several commands share: WSL detection (the
//! `fix-symlink` command rebuilds links differently there), the Windows
//! registry reader behind `winreg`, and Android NDK discovery behind
//! `ndk-root`.
//!
//! ## Architecture
//!
//! - `is_wsl`: presence of the `WSL_DISTRO_NAME` environment variable, the
//!   marker WSL sets for every process it launches.
//! - **`registry`**: first-non-empty registry value lookup; compiled to a
//!   constant empty answer on non-Windows targets.
//! - **`ndk`**: NDK root discovery across the SDK layouts Android tooling
//!   has used over the years.
//!
use std::env;

/// Android NDK root discovery.
pub mod ndk;
/// Windows registry value lookup (empty on other platforms).
pub mod registry;

/// True when running under Windows Subsystem for Linux.
pub fn is_wsl() -> bool {
    env::var_os("WSL_DISTRO_NAME").is_some()
}
