//! # ShellRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for all
//! shared utility modules used throughout the ShellRS CLI. It aggregates
//! the cross-cutting concerns — filesystem operations, process execution,
//! host inspection, and network transfer — that the command handlers in
//! `commands::` compose into user-visible behavior.
//!
//! By centralizing these utilities under the `common::` namespace, ShellRS
//! keeps command-specific logic (`commands::`) separate from the mechanics
//! it drives and from core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`fs`**: Glob expansion, path translation, copy/move/remove/link primitives. The bulk of the tool lives here.
//! - **`network`**: The FTP/FTPS/SFTP upload client.
//! - **`process`**: Shell-line child execution with injected environment.
//! - **`system`**: WSL detection, Windows registry lookup, Android NDK discovery.
//!

/// Filesystem operations: globbing, path translation, copy, remove, links.
pub mod fs;
/// Network transfer utilities (upload client).
pub mod network;
/// External process execution utilities.
pub mod process;
/// Host-environment inspection (WSL, registry, NDK).
pub mod system;
