//! # ShellRS Filesystem Removal Helpers
//!
//! File: cli/src/common/fs/remove.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Removal primitives shared by the `rm` and `rmdir` commands:
//!
//! - `remove_tree`: deletes a directory and everything under it, clearing
//!   the read-only/write-protect bit and retrying once when a delete is
//!   refused (Windows leaves read-only flags on checked-out files; build
//!   trees accumulate them).
//! - `prune_empty_dirs`: bottom-up removal of every subdirectory left empty
//!   after its children are processed.
//! - `remove_empty_ancestors`: removes a directory and then climbs parent
//!   by parent, removing each now-empty ancestor, until one refuses.
//!
//! ## Architecture
//!
//! All helpers return `io::Result`; callers own the diagnostics. The
//! bottom-up prune rides on `walkdir` with `contents_first`, so children are
//! visited (and removed) before the directory that holds them is checked
//! for emptiness.
//!
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Clears the write-protect bit on `path`.
#[cfg(unix)]
fn clear_write_protect(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::symlink_metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o200);
    fs::set_permissions(path, perms)
}

/// Clears the read-only attribute on `path`.
#[cfg(not(unix))]
fn clear_write_protect(path: &Path) -> io::Result<()> {
    let mut perms = fs::symlink_metadata(path)?.permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    perms.set_readonly(false);
    fs::set_permissions(path, perms)
}

/// Runs a removal operation, clearing write protection and retrying once if
/// the first attempt is refused.
fn remove_unprotecting<F>(path: &Path, op: F) -> io::Result<()>
where
    F: Fn(&Path) -> io::Result<()>,
{
    match op(path) {
        Ok(()) => Ok(()),
        Err(first) => {
            debug!("removal of {} refused ({first}); clearing write protection", path.display());
            clear_write_protect(path).map_err(|_| first)?;
            op(path)
        }
    }
}

/// Removes `path` and its entire subtree.
///
/// Symbolic links inside the tree are removed as links, never followed.
/// Entries that refuse deletion get the write-protect bit cleared and one
/// retry; a second refusal aborts the walk with that error.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();
        if entry.file_type()?.is_dir() {
            remove_tree(&child)?;
        } else {
            remove_unprotecting(&child, |p| fs::remove_file(p))?;
        }
    }
    remove_unprotecting(path, |p| fs::remove_dir(p))
}

/// Removes every subdirectory of `path` left empty after its own children
/// are processed. `path` itself is left in place.
///
/// The first unreadable or undeletable entry aborts the walk with its
/// error; the `rmdir -e` command ignores that outcome by contract.
pub fn prune_empty_dirs(path: &Path) -> io::Result<()> {
    for entry in WalkDir::new(path).contents_first(true) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() && entry.path() != path {
            let mut contents = fs::read_dir(entry.path())?;
            if contents.next().is_none() {
                debug!("removing empty directory {}", entry.path().display());
                fs::remove_dir(entry.path())?;
            }
        }
    }
    Ok(())
}

/// Removes `path`, then walks upward removing each now-empty ancestor.
///
/// The climb ends at the first ancestor that refuses removal (non-empty,
/// permission-denied, or the filesystem root); the caller treats that as
/// the normal stopping condition, not a failure.
pub fn remove_empty_ancestors(path: &Path) -> io::Result<()> {
    let mut current = Some(path);
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() {
            break;
        }
        fs::remove_dir(dir)?;
        debug!("removed empty directory {}", dir.display());
        current = dir.parent();
    }
    Ok(())
}
