//! # ShellRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! This module aggregates every ShellRS operation and owns the dispatcher
//! that maps a command-name string to the routine implementing it. It is
//! the single registry: a command exists exactly when it has a row in the
//! `COMMANDS` table, and `--list` prints that table.
//!
//! ## Architecture
//!
//! - `CommandKind`: one enumerated tag per operation, fixed at compile
//!   time. Lookup normalizes the typed name to lower case and maps
//!   underscores to hyphens, so `fix_symlink` and `fix-symlink` are the
//!   same command.
//! - `dispatch`: routes an `Invocation` to its handler and returns the
//!   process exit status. Unknown or missing commands are
//!   invalid-argument errors handled in `main.rs`, not a fall-through.
//!
//! Each handler takes the whole `Invocation` and returns `Result<i32>`:
//! the `Ok` value is the exit status (operations report their own per-item
//! diagnostics), while `Err` is reserved for invalid invocations and
//! unrecoverable failures that the front end prints once.
//!
use crate::core::error::{Result, ShellError};
use crate::core::options::Invocation;
use tracing::debug;

/// Implements the `cargo-exec` command (runs a shell line with Cargo package env vars).
mod cargo_exec;
/// Implements the `cmpver` command (4-component version comparison).
mod cmpver;
/// Implements the `cp` command (glob-aware copy, recursive with `-r`).
mod cp;
/// Implements the `fix-symlink` command (link normalization and repair).
mod fix_symlink;
/// Implements the `mkdir` command (create directory chains, race-tolerant).
mod mkdir;
/// Implements the `mklink` command (file/directory symbolic links).
mod mklink;
/// Implements the `mv` command (glob-aware move).
mod mv;
/// Implements the `ndk-root` command (Android NDK discovery).
mod ndk_root;
/// Implements the path information commands (`cwd`, `mydir`, `relpath`,
/// `win2wsl-path`, `wsl2win-path`, `is-wsl-win-path`).
mod paths;
/// Implements the `rm` command (glob-aware removal, recursive with `-r`).
mod rm;
/// Implements the `rmdir` command (empty-directory removal and pruning).
mod rmdir;
/// Implements the `timestamp` command (fractional Unix epoch).
mod timestamp;
/// Implements the `touch` command (create or re-stamp files).
mod touch;
/// Implements the `upload` command (FTP/FTPS/SFTP file upload).
mod upload;
/// Implements the `winreg` command (Windows registry value lookup).
mod winreg;

/// Enumerated tag for every registered command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Rm,
    Mkdir,
    Rmdir,
    Mv,
    Cp,
    Mklink,
    FixSymlink,
    Cwd,
    Mydir,
    Relpath,
    Win2WslPath,
    Wsl2WinPath,
    IsWslWinPath,
    Touch,
    Timestamp,
    Cmpver,
    Winreg,
    NdkRoot,
    CargoExec,
    Upload,
}

/// The command registry: canonical name → tag. `--list` prints the names
/// in this order.
pub const COMMANDS: &[(&str, CommandKind)] = &[
    ("rm", CommandKind::Rm),
    ("mkdir", CommandKind::Mkdir),
    ("rmdir", CommandKind::Rmdir),
    ("mv", CommandKind::Mv),
    ("cp", CommandKind::Cp),
    ("mklink", CommandKind::Mklink),
    ("fix-symlink", CommandKind::FixSymlink),
    ("cwd", CommandKind::Cwd),
    ("mydir", CommandKind::Mydir),
    ("relpath", CommandKind::Relpath),
    ("win2wsl-path", CommandKind::Win2WslPath),
    ("wsl2win-path", CommandKind::Wsl2WinPath),
    ("is-wsl-win-path", CommandKind::IsWslWinPath),
    ("touch", CommandKind::Touch),
    ("timestamp", CommandKind::Timestamp),
    ("cmpver", CommandKind::Cmpver),
    ("winreg", CommandKind::Winreg),
    ("ndk-root", CommandKind::NdkRoot),
    ("cargo-exec", CommandKind::CargoExec),
    ("upload", CommandKind::Upload),
];

impl CommandKind {
    /// Resolves a typed command name to its tag: lower-cased, with
    /// underscores treated as hyphens.
    pub fn from_name(name: &str) -> Option<CommandKind> {
        let normalized = name.to_ascii_lowercase().replace('_', "-");
        COMMANDS
            .iter()
            .find(|(registered, _)| *registered == normalized)
            .map(|(_, kind)| *kind)
    }
}

/// Prints every registered command name, one per line.
pub fn list_commands() {
    for (name, _) in COMMANDS {
        println!("{name}");
    }
}

/// Routes one invocation to its command handler.
///
/// # Returns
///
/// The process exit status produced by the operation.
///
/// # Errors
///
/// `InvalidArguments` for an empty or unrecognized command; otherwise
/// whatever unrecoverable failure the handler propagates.
pub fn dispatch(inv: &Invocation) -> Result<i32> {
    let Some(kind) = CommandKind::from_name(&inv.command) else {
        if inv.command.is_empty() {
            return Err(ShellError::InvalidArguments("Missing command".into()).into());
        }
        return Err(ShellError::InvalidArguments(format!(
            "Unrecognized command \"{}\"",
            inv.command
        ))
        .into());
    };
    debug!("dispatching {:?} with {} argument(s)", kind, inv.args.len());

    match kind {
        CommandKind::Rm => rm::run(inv),
        CommandKind::Mkdir => mkdir::run(inv),
        CommandKind::Rmdir => rmdir::run(inv),
        CommandKind::Mv => mv::run(inv),
        CommandKind::Cp => cp::run(inv),
        CommandKind::Mklink => mklink::run(inv),
        CommandKind::FixSymlink => fix_symlink::run(inv),
        CommandKind::Cwd => paths::run_cwd(inv),
        CommandKind::Mydir => paths::run_mydir(inv),
        CommandKind::Relpath => paths::run_relpath(inv),
        CommandKind::Win2WslPath => paths::run_win2wsl(inv),
        CommandKind::Wsl2WinPath => paths::run_wsl2win(inv),
        CommandKind::IsWslWinPath => paths::run_is_wsl_win_path(inv),
        CommandKind::Touch => touch::run(inv),
        CommandKind::Timestamp => timestamp::run(inv),
        CommandKind::Cmpver => cmpver::run(inv),
        CommandKind::Winreg => winreg::run(inv),
        CommandKind::NdkRoot => ndk_root::run(inv),
        CommandKind::CargoExec => cargo_exec::run(inv),
        CommandKind::Upload => upload::run(inv),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{exit_code_for, EINVAL};
    use crate::core::options::Options;

    fn invocation(command: &str) -> Invocation {
        Invocation {
            command: command.to_string(),
            args: Vec::new(),
            options: Options::default(),
        }
    }

    #[test]
    fn test_from_name_normalizes() {
        assert_eq!(
            CommandKind::from_name("fix-symlink"),
            Some(CommandKind::FixSymlink)
        );
        assert_eq!(
            CommandKind::from_name("fix_symlink"),
            Some(CommandKind::FixSymlink)
        );
        assert_eq!(
            CommandKind::from_name("WIN2WSL_PATH"),
            Some(CommandKind::Win2WslPath)
        );
        assert_eq!(CommandKind::from_name("frobnicate"), None);
        assert_eq!(CommandKind::from_name(""), None);
    }

    #[test]
    fn test_registry_is_complete() {
        // Twenty commands, no duplicate names.
        assert_eq!(COMMANDS.len(), 20);
        let mut names: Vec<_> = COMMANDS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let err = dispatch(&invocation("frobnicate")).unwrap_err();
        assert_eq!(exit_code_for(&err), EINVAL);
        assert!(err.to_string().contains("Unrecognized command \"frobnicate\""));
    }

    #[test]
    fn test_dispatch_missing_command() {
        let err = dispatch(&invocation("")).unwrap_err();
        assert_eq!(exit_code_for(&err), EINVAL);
        assert!(err.to_string().contains("Missing command"));
    }
}
