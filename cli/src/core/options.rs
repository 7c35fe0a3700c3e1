//! # ShellRS Shared Command Options
//!
//! File: cli/src/core/options.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! This module defines the flag set shared by every ShellRS command and the
//! `Invocation` value handed to the dispatcher. Unlike a subcommand-style
//! CLI, all ShellRS commands draw from one pool of flags (`-f`, `-r`, `-D`,
//! ...), mirroring how the tool is driven from build scripts:
//!
//! ```bash
//! shellrs rm -rf target/debug target/release
//! shellrs -f mkdir out/objs
//! ```
//!
//! ## Architecture
//!
//! - `Options`: a `clap::Args` struct flattened into the top-level parser in
//!   `main.rs`. Flags may appear before or after the command name; clap's
//!   default intermixed parsing handles both orders.
//! - `Invocation`: the parsed command name, its positional arguments, and
//!   the shared options. Constructed once per process run, immutable
//!   afterwards, and threaded by reference through the dispatcher into the
//!   command handlers.
//!
use clap::Args;

/// Flag set shared by all commands.
///
/// Each command reads only the flags that are meaningful to it; the rest are
/// accepted and ignored, so scripts can pass a uniform flag block.
#[derive(Args, Debug, Clone, Default)]
pub struct Options {
    /// Creates a directory symbolic link (mklink).
    #[arg(short = 'D', long = "symlinkd")]
    pub symlinkd: bool,

    /// Remove all empty directories (rmdir).
    #[arg(short = 'e', long = "empty-dirs")]
    pub remove_empty_dirs: bool,

    /// Ignore errors, never prompt.
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// List all commands.
    #[arg(long = "list")]
    pub list_cmds: bool,

    /// Never follow symbolic links in SOURCE (cp).
    ///
    /// The stored value is `follow_symlinks`; passing `-P` clears it.
    #[arg(
        short = 'P',
        long = "no-dereference",
        action = clap::ArgAction::SetFalse
    )]
    pub follow_symlinks: bool,

    /// If existing, make parent directories as needed.
    ///
    /// Accepted for compatibility; parent creation is always on.
    #[arg(short = 'p', long = "parents")]
    #[allow(dead_code)] // Parsed for compatibility, intentionally unread.
    pub parents: bool,

    /// Copy/remove directories and their contents recursively.
    #[arg(short = 'r', long = "recursive", visible_short_alias = 'R')]
    pub recursive: bool,

    /// Read arguments from stdin (rm).
    #[arg(long = "args-from-stdin", alias = "stdin")]
    pub args_from_stdin: bool,
}

/// One parsed command-line run: the command, its arguments, and the flags.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The command name as typed (normalization happens in the dispatcher).
    pub command: String,
    /// Positional arguments following the command name.
    pub args: Vec<String>,
    /// The shared flag set.
    pub options: Options,
}
