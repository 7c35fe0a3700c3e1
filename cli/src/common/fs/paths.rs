//! # ShellRS Path Translation Utilities
//!
//! File: cli/src/common/fs/paths.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Pure string-level path translation between the three spellings a build
//! script meets on a Windows/WSL machine:
//!
//! - native Windows drive paths (`C:\Users\x` or `C:/Users/x`),
//! - WSL mount paths (`/mnt/c/Users/x`),
//! - and the normalized forward-slash form used for all printed output.
//!
//! ## Architecture
//!
//! Every function here is total: malformed or foreign input passes through
//! unchanged rather than producing an error. Nothing touches the filesystem;
//! absolutization against the working directory (needed by the
//! `is-wsl-win-path` command for relative arguments) happens in the command
//! layer so these stay pure and trivially testable.
//!
//! Both spellings of "absolute" (`/...` and `X:/...`) are lexically
//! normalized before translation, so `C:/a/../b` and `/mnt/c//a/.` translate
//! the same on every host platform.
//!

/// Replaces backslashes with forward slashes. Used for all printed paths.
pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// True if the slash-normalized string is an absolute path in either the
/// POSIX (`/...`) or drive-letter (`X:...`) spelling.
fn is_absolute_like(path: &str) -> bool {
    let b = path.as_bytes();
    path.starts_with('/') || (b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':')
}

/// Lexically normalizes an absolute forward-slash path: collapses duplicate
/// separators and `.` segments and resolves `..` without consulting the
/// filesystem. `..` never climbs above the root.
pub fn lexical_normalize(path: &str) -> String {
    // Split off the root: "/" or "X:" (optionally followed by "/").
    let (root, rest) = if let Some(rest) = path.strip_prefix('/') {
        ("/".to_string(), rest)
    } else if path.len() >= 2 && path.as_bytes()[1] == b':' {
        (format!("{}:/", &path[..1]), path[2..].trim_start_matches('/'))
    } else {
        (String::new(), path)
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    let joined = stack.join("/");
    if joined.is_empty() {
        // Bare root: "/" stays "/", "X:/" stays "X:/".
        if root.is_empty() {
            ".".to_string()
        } else {
            root
        }
    } else {
        format!("{}{}", root, joined)
    }
}

/// Translates a Windows drive-letter path to its WSL mount form.
///
/// `C:\Users\x` and `C:/Users/x` both become `/mnt/c/Users/x`; the drive
/// letter is lower-cased and trailing slashes are stripped (`C:/` →
/// `/mnt/c`). Input without a single-letter drive prefix is returned with
/// slashes normalized but otherwise untouched.
pub fn win_to_wsl(path: &str) -> String {
    let mut p = normalize_slashes(path);
    if is_absolute_like(&p) {
        p = lexical_normalize(&p);
    }
    if let Some((drive, rest)) = p.split_once(':') {
        if drive.len() == 1 && drive.as_bytes()[0].is_ascii_alphabetic() {
            let translated = format!("/mnt/{}{}", drive.to_ascii_lowercase(), rest);
            return translated.trim_end_matches('/').to_string();
        }
    }
    p
}

/// Translates a WSL mount path back to a Windows drive-letter path.
///
/// `/mnt/c/Users/x` becomes `C:/Users/x`; bare `/mnt/c` becomes `C:/` (the
/// drive letter is upper-cased). Anything not matching `/mnt/<letter>[/...]`
/// is returned with slashes normalized but otherwise untouched.
pub fn wsl_to_win(path: &str) -> String {
    let mut p = normalize_slashes(path);
    if is_absolute_like(&p) {
        p = lexical_normalize(&p);
    }
    let b = p.as_bytes();
    if b.len() >= 6 && p.starts_with("/mnt/") && b[5].is_ascii_alphabetic() {
        if b.len() == 6 {
            return format!("{}:/", (b[5] as char).to_ascii_uppercase());
        }
        if b[6] == b'/' {
            return format!("{}:{}", (b[5] as char).to_ascii_uppercase(), &p[6..]);
        }
    }
    p
}

/// True iff the slash-normalized form starts with `/mnt/<letter>` and is
/// either exactly that or followed immediately by `/`.
///
/// The caller is responsible for absolutizing relative input first; this
/// predicate only inspects the string.
pub fn is_wsl_win_path(path: &str) -> bool {
    let p = normalize_slashes(path);
    let b = p.as_bytes();
    b.len() >= 6
        && p.starts_with("/mnt/")
        && b[5].is_ascii_alphabetic()
        && (b.len() == 6 || b[6] == b'/')
}
