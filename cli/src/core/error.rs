//! # ShellRS Error Types
//!
//! File: cli/src/core/error.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! This module defines the error types and the exit-status contract used
//! throughout the ShellRS application. Every command ultimately reduces to a
//! small integer exit status, and this module is the single place where the
//! mapping between error conditions and those statuses lives.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ShellError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error taxonomy mirrors the process exit codes:
//! - `InvalidArguments` — bad flags, unknown command, missing required args (exit 8)
//! - `NotFound` — a required entry is absent (exit 7, used by `ndk-root`)
//! - `OperationFailed` — an OS-level failure during a mutation (exit 1)
//! - `Unsupported` — the platform lacks a required facility (treated as
//!   silent success by the commands that can hit it; exit 0)
//! - `Interrupted` — the user cancelled with Ctrl-C (exit 254)
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if args.len() < 2 {
//!     return Err(ShellError::InvalidArguments("Missing command".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Map a propagated error back to a process exit status
//! let status = exit_code_for(&err);
//! ```
//!
use thiserror::Error;

/// Exit status for success.
pub const EOK: i32 = 0;
/// Exit status for a generic operation failure.
pub const EFAIL: i32 = 1;
/// Exit status for "not found" (`ndk-root` only).
pub const ENOENT: i32 = 7;
/// Exit status for an invalid invocation (bad command, bad arguments).
pub const EINVAL: i32 = 8;
/// Exit status reported after a keyboard interrupt.
pub const EINTERRUPT: i32 = 254;

/// Custom error type for the ShellRS application.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("Can not find {0}")]
    NotFound(String),

    #[error("{0}")]
    OperationFailed(String),

    #[error("'{0}' is not supported on this platform")]
    Unsupported(String),

    #[error("interrupted")]
    Interrupted,
}

impl ShellError {
    /// The process exit status this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::InvalidArguments(_) => EINVAL,
            ShellError::NotFound(_) => ENOENT,
            ShellError::OperationFailed(_) => EFAIL,
            ShellError::Unsupported(_) => EOK,
            ShellError::Interrupted => EINTERRUPT,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

/// Maps a propagated `anyhow::Error` back to a process exit status.
///
/// If the chain bottoms out in a `ShellError`, its own mapping wins;
/// anything else (an I/O error from an upload, a failed manifest parse)
/// is a generic operation failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ShellError>()
        .map(ShellError::exit_code)
        .unwrap_or(EFAIL)
}
