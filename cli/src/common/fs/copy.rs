//! # ShellRS Filesystem Copy and Move Helpers
//!
//! File: cli/src/common/fs/copy.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Copy and move primitives shared by the `cp` and `mv` commands:
//!
//! - `copy_entry`: copies one file, preserving its modification time. When
//!   symlink following is disabled, a symlink source is duplicated *as a
//!   link* (same target string) rather than materialized.
//! - `copy_tree`: recursive directory copy that merges into a pre-existing
//!   destination tree instead of refusing it.
//! - `move_path`: OS-level rename with a copy-then-delete fallback for
//!   cross-device moves.
//!
//! ## Architecture
//!
//! A destination that is an existing directory means "place inside, keeping
//! the source's name"; otherwise the destination is the final path. That
//! resolution happens here once (`resolve_into_dir`) so all callers agree.
//! Timestamps travel via `filetime`, which can stamp directories on every
//! platform.
//!
use crate::common::fs::links::make_symlink;
use crate::common::fs::remove::remove_tree;
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// If `dst` is an existing directory, returns `dst/<basename of src>`,
/// otherwise `dst` itself.
fn resolve_into_dir(src: &Path, dst: &Path) -> PathBuf {
    if dst.is_dir() {
        dst.join(src.file_name().unwrap_or_default())
    } else {
        dst.to_path_buf()
    }
}

/// Copies one file (or link) from `src` to `dst`.
///
/// With `follow_symlinks` unset, a symlink source is recreated as a link
/// with the same target, replacing whatever already sits at the
/// destination. Otherwise the file contents are copied and the source's
/// access/modification times are applied to the copy.
pub fn copy_entry(src: &Path, dst: &Path, follow_symlinks: bool) -> io::Result<()> {
    let meta = fs::symlink_metadata(src)?;
    let dst = resolve_into_dir(src, dst);

    if meta.file_type().is_symlink() && !follow_symlinks {
        let target = fs::read_link(src)?;
        if fs::symlink_metadata(&dst).is_ok() {
            fs::remove_file(&dst)?;
        }
        debug!("duplicating link {} -> {}", dst.display(), target.display());
        return make_symlink(&target, &dst, false);
    }

    fs::copy(src, &dst)?;
    let followed = fs::metadata(src)?;
    filetime::set_file_times(
        &dst,
        FileTime::from_last_access_time(&followed),
        FileTime::from_last_modification_time(&followed),
    )
}

/// Recursively copies the tree rooted at `src` into `dst`, creating `dst`
/// if needed and merging with anything already there. Files are copied via
/// `copy_entry`, so the symlink-duplication rule applies throughout the
/// tree.
pub fn copy_tree(src: &Path, dst: &Path, follow_symlinks: bool) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_symlink() && !follow_symlinks {
            copy_entry(&from, &to, false)?;
        } else if from.is_dir() {
            copy_tree(&from, &to, follow_symlinks)?;
        } else {
            copy_entry(&from, &to, follow_symlinks)?;
        }
    }
    Ok(())
}

/// Moves `src` to `dst` (into `dst` when it is an existing directory).
///
/// Tries an OS rename first; when that is refused (typically a cross-device
/// move), falls back to copy-then-delete, preserving symlinks as links.
pub fn move_path(src: &Path, dst: &Path) -> io::Result<()> {
    let target = resolve_into_dir(src, dst);
    match fs::rename(src, &target) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            debug!(
                "rename {} -> {} refused ({rename_err}); copying instead",
                src.display(),
                target.display()
            );
            let Ok(meta) = fs::symlink_metadata(src) else {
                return Err(rename_err);
            };
            if meta.file_type().is_symlink() || meta.is_file() {
                copy_entry(src, &target, false)?;
                fs::remove_file(src)
            } else if meta.is_dir() {
                copy_tree(src, &target, false)?;
                remove_tree(src)
            } else {
                Err(rename_err)
            }
        }
    }
}
