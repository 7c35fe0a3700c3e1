//! # ShellRS Network Utilities (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Network-facing helpers. The single occupant today is the upload client
//! used by the `upload` command: destination URL parsing plus thin FTP/FTPS
//! and SFTP transfer wrappers.
//!

/// Upload destination parsing and the FTP/FTPS/SFTP transfer clients.
pub mod upload;
