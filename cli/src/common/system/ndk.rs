//! # ShellRS Android NDK Discovery
//!
//! File: cli/src/common/system/ndk.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Backs the `ndk-root` command: locate the newest usable Android NDK
//! install so cross-compiling build scripts can find the toolchain without
//! hard-coding versions.
//!
//! ## Architecture
//!
//! Discovery order:
//!
//! 1. A non-empty `ANDROID_NDK_ROOT` wins outright.
//! 2. Otherwise the SDK's `ndk` directory is scanned: `$ANDROID_HOME/ndk`,
//!    or on non-Windows hosts the conventional `/opt` locations.
//! 3. A child directory qualifies only if it actually contains
//!    `build/cmake/android.toolchain.cmake` (half-deleted installs don't),
//!    and its name parses as either the modern `26.1.10909125[.tag]` form
//!    or the legacy `android-ndk-r25c` form. Legacy letters count as minor
//!    versions (`a` → 0, `b` → 1, ...).
//! 4. The highest (major, minor, patch) wins.
//!
use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional NDK locations probed when `ANDROID_HOME` is not set
/// (non-Windows hosts only).
#[cfg(not(windows))]
const FALLBACK_SDK_DIRS: &[&str] = &["/opt/ndk", "/opt/android/ndk", "/opt/android/sdk/ndk"];

/// Finds the best NDK install, or `None` with a diagnostic already printed
/// when no SDK root can be determined.
pub fn discover() -> Option<PathBuf> {
    if let Ok(root) = env::var("ANDROID_NDK_ROOT") {
        if !root.is_empty() {
            debug!("using ANDROID_NDK_ROOT={root}");
            return Some(PathBuf::from(root));
        }
    }

    let sdk_dir = match env::var("ANDROID_HOME") {
        Ok(home) if !home.is_empty() => Some(Path::new(&home).join("ndk")),
        _ => fallback_sdk_dir(),
    };
    let Some(sdk_dir) = sdk_dir else {
        eprintln!("The environment variable `ANDROID_HOME` is not set.");
        return None;
    };

    best_install(&sdk_dir)
}

#[cfg(not(windows))]
fn fallback_sdk_dir() -> Option<PathBuf> {
    FALLBACK_SDK_DIRS
        .iter()
        .map(PathBuf::from)
        .find(|dir| dir.is_dir())
}

#[cfg(windows)]
fn fallback_sdk_dir() -> Option<PathBuf> {
    None
}

/// Scans `sdk_dir` for NDK installs and returns the highest-versioned one.
pub fn best_install(sdk_dir: &Path) -> Option<PathBuf> {
    let release = Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:\.\w+)?$").ok()?;
    let legacy = Regex::new(r"^android-ndk-r(\d+)([a-z]+)$").ok()?;

    let mut found: Vec<(PathBuf, (u64, u64, u64))> = Vec::new();
    for entry in fs::read_dir(sdk_dir).ok()? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        // Only complete installs carry the cmake toolchain file.
        if !path.join("build/cmake/android.toolchain.cmake").is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        let version = if let Some(caps) = release.captures(name) {
            Some((
                caps[1].parse().unwrap_or(0),
                caps[2].parse().unwrap_or(0),
                caps[3].parse().unwrap_or(0),
            ))
        } else {
            legacy.captures(name).map(|caps| {
                (
                    caps[1].parse().unwrap_or(0),
                    legacy_minor(&caps[2]),
                    0,
                )
            })
        };
        if let Some(version) = version {
            debug!("ndk candidate {} => {:?}", path.display(), version);
            found.push((path, version));
        }
    }

    found
        .into_iter()
        .max_by_key(|(_, version)| *version)
        .map(|(path, _)| path)
}

/// Maps a legacy revision-letter suffix to a minor number: each letter
/// becomes a decimal digit (`a` → 0, `b` → 1, ...), concatenated.
fn legacy_minor(letters: &str) -> u64 {
    let digits: String = letters
        .chars()
        .map(|c| ((c as u8 - b'a') + b'0') as char)
        .collect();
    digits.parse().unwrap_or(0)
}
