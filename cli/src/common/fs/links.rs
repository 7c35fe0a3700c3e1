//! # ShellRS Symbolic Link Helpers
//!
//! File: cli/src/common/fs/links.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! This module provides the cross-platform primitives behind the `mklink`
//! and `fix-symlink` commands. Unix has one kind of symlink; Windows
//! distinguishes file links from directory links, so the creation primitive
//! carries a directory flag that is meaningful only there.
//!
//! ## Architecture
//!
//! - `to_native_separators`: rewrites both separator styles in a link target
//!   to the platform's native one, so a target recorded in a build script as
//!   `../lib/out.so` or `..\lib\out.so` works either way.
//! - `make_symlink`: platform-specific link creation
//!   (`std::os::unix::fs::symlink` / `std::os::windows::fs::symlink_dir` or
//!   `symlink_file`).
//! - `rebuild_link`: reads a link's target, deletes the link, and recreates
//!   it in place. On WSL over a Windows filesystem this normalizes the
//!   on-disk link representation so both environments can read it.
//!
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Rewrites both `/` and `\` in `target` to the platform's native
/// separator.
pub fn to_native_separators(target: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    target
        .replace('/', &sep.to_string())
        .replace('\\', &sep.to_string())
}

/// Creates a symbolic link at `link` pointing to `target`.
///
/// `directory` selects directory-link semantics on platforms that
/// distinguish them (Windows); it is ignored elsewhere.
#[cfg(unix)]
pub fn make_symlink(target: &Path, link: &Path, directory: bool) -> io::Result<()> {
    let _ = directory;
    std::os::unix::fs::symlink(target, link)
}

/// Creates a symbolic link at `link` pointing to `target`.
///
/// `directory` selects directory-link semantics on platforms that
/// distinguish them (Windows); it is ignored elsewhere.
#[cfg(windows)]
pub fn make_symlink(target: &Path, link: &Path, directory: bool) -> io::Result<()> {
    if directory {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(not(any(unix, windows)))]
pub fn make_symlink(_target: &Path, _link: &Path, _directory: bool) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

/// Destructively rebuilds the symlink at `path`: reads its target, removes
/// the link, and recreates it with the same target. Returns the target.
pub fn rebuild_link(path: &Path) -> io::Result<PathBuf> {
    let target = fs::read_link(path)?;
    fs::remove_file(path)?;
    make_symlink(&target, path, false)?;
    debug!("rebuilt link {} -> {}", path.display(), target.display());
    Ok(target)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_to_native_separators() {
        let native = format!(
            "..{sep}lib{sep}out.so",
            sep = std::path::MAIN_SEPARATOR
        );
        assert_eq!(to_native_separators("../lib/out.so"), native);
        assert_eq!(to_native_separators(r"..\lib\out.so"), native);
    }

    #[cfg(unix)]
    #[test]
    fn test_make_symlink_and_rebuild() -> io::Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("target.txt");
        let link = dir.path().join("link");
        fs::write(&target, "t")?;

        make_symlink(&target, &link, false)?;
        assert!(link.is_symlink());
        assert_eq!(fs::read_link(&link)?, target);

        // Rebuilding preserves the target.
        let rebuilt = rebuild_link(&link)?;
        assert_eq!(rebuilt, target);
        assert_eq!(fs::read_link(&link)?, target);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_rebuild_keeps_relative_targets_relative() -> io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("data.bin"), "d")?;
        let link = dir.path().join("data.link");
        make_symlink(Path::new("data.bin"), &link, false)?;

        let rebuilt = rebuild_link(&link)?;
        assert_eq!(rebuilt, Path::new("data.bin"));
        assert_eq!(fs::read_link(&link)?, Path::new("data.bin"));
        Ok(())
    }
}
