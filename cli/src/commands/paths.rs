//! # ShellRS Path Information Commands
//!
//! File: cli/src/commands/paths.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! The six path-reporting commands, all thin wrappers over
//! `common::fs::paths`:
//!
//! - `cwd` — the working directory, forward slashes.
//! - `mydir` — the canonicalized directory holding the executable.
//! - `relpath <path> [start]` — lexical relative path from `start` (default
//!   the working directory); the empty string when no answer exists.
//! - `win2wsl-path [path]` / `wsl2win-path [path]` — drive↔mount
//!   translation; the working directory when no argument is given.
//! - `is-wsl-win-path [path]` — prints `true`/`false`.
//!
//! Every output is written with `print!` — no trailing newline — because
//! these are consumed by `$(...)` substitutions in makefiles, where a
//! newline becomes part of the value.
//!
use crate::common::fs::paths;
use crate::core::error::{Result, EOK};
use crate::core::options::Invocation;
use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};

/// The first positional argument, or the working directory.
fn arg_or_cwd(inv: &Invocation) -> Result<String> {
    match inv.args.first() {
        Some(arg) => Ok(arg.clone()),
        None => {
            let cwd = env::current_dir().context("Failed to read the working directory")?;
            Ok(cwd.display().to_string())
        }
    }
}

/// Joins a relative path to the working directory; absolute paths pass
/// through.
fn absolutize(path: &str) -> Option<PathBuf> {
    let p = Path::new(path);
    if p.is_absolute() {
        Some(p.to_path_buf())
    } else {
        env::current_dir().ok().map(|cwd| cwd.join(p))
    }
}

/// Handler for `cwd`.
pub fn run_cwd(_inv: &Invocation) -> Result<i32> {
    let cwd = env::current_dir().context("Failed to read the working directory")?;
    print!("{}", paths::normalize_slashes(&cwd.display().to_string()));
    Ok(EOK)
}

/// Handler for `mydir`: the directory holding this executable, resolved to
/// its real path; falls back to the working directory.
pub fn run_mydir(_inv: &Invocation) -> Result<i32> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let dir = match exe_dir {
        Some(dir) if dir.is_dir() => dir.canonicalize().unwrap_or(dir),
        _ => env::current_dir().context("Failed to read the working directory")?,
    };
    print!("{}", paths::normalize_slashes(&dir.display().to_string()));
    Ok(EOK)
}

/// The relative-path computation behind `relpath`; `None` means "no
/// answer", printed as the empty string.
fn compute_relpath(inv: &Invocation) -> Option<String> {
    let path = inv.args.first()?;
    if path.is_empty() {
        return None;
    }
    let target = absolutize(path)?;
    let base = match inv.args.get(1) {
        Some(start) => absolutize(start)?,
        None => env::current_dir().ok()?,
    };
    let diff = pathdiff::diff_paths(&target, &base)?;
    let rendered = diff.display().to_string();
    // Identical paths diff to nothing; the conventional spelling is ".".
    Some(if rendered.is_empty() {
        ".".to_string()
    } else {
        rendered
    })
}

/// Handler for `relpath`.
pub fn run_relpath(inv: &Invocation) -> Result<i32> {
    let rel = compute_relpath(inv).unwrap_or_default();
    print!("{}", paths::normalize_slashes(&rel));
    Ok(EOK)
}

/// Handler for `win2wsl-path`.
pub fn run_win2wsl(inv: &Invocation) -> Result<i32> {
    print!("{}", paths::win_to_wsl(&arg_or_cwd(inv)?));
    Ok(EOK)
}

/// Handler for `wsl2win-path`.
pub fn run_wsl2win(inv: &Invocation) -> Result<i32> {
    print!("{}", paths::wsl_to_win(&arg_or_cwd(inv)?));
    Ok(EOK)
}

/// Handler for `is-wsl-win-path`.
pub fn run_is_wsl_win_path(inv: &Invocation) -> Result<i32> {
    let raw = arg_or_cwd(inv)?;
    let absolute = match absolutize(&raw) {
        Some(p) => paths::lexical_normalize(&paths::normalize_slashes(&p.display().to_string())),
        None => raw,
    };
    let verdict = paths::is_wsl_win_path(&absolute);
    print!("{}", if verdict { "true" } else { "false" });
    Ok(EOK)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::Options;

    fn invocation(args: Vec<String>) -> Invocation {
        Invocation {
            command: "relpath".to_string(),
            args,
            options: Options::default(),
        }
    }

    #[test]
    fn test_compute_relpath_between_absolute_paths() {
        let inv = invocation(vec!["/a/b/c".to_string(), "/a/d".to_string()]);
        assert_eq!(compute_relpath(&inv).unwrap(), "../b/c");
    }

    #[test]
    fn test_compute_relpath_identical_paths() {
        let inv = invocation(vec!["/a/b".to_string(), "/a/b".to_string()]);
        assert_eq!(compute_relpath(&inv).unwrap(), ".");
    }

    #[test]
    fn test_compute_relpath_missing_or_empty_argument() {
        assert_eq!(compute_relpath(&invocation(vec![])), None);
        assert_eq!(
            compute_relpath(&invocation(vec![String::new()])),
            None
        );
    }
}
