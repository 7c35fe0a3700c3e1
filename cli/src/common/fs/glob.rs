//! # ShellRS Glob Expansion
//!
//! File: cli/src/common/fs/glob.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Every multi-file command (`rm`, `mv`, `cp`, `touch`, `fix-symlink`,
//! `upload`) expands its arguments through this one module so wildcard
//! behavior is identical across commands and platforms. Patterns use
//! shell-style wildcards (`*`, `?`, `[...]`), resolved relative to the
//! working directory.
//!
//! ## Architecture
//!
//! A thin wrapper over the `glob` crate with the match options pinned:
//!
//! - `require_literal_leading_dot` is on, so `*` does not match dotfiles —
//!   the conventional shell behavior scripts expect.
//! - An unparsable pattern (e.g. an unclosed `[`) degrades to a literal
//!   existence probe instead of an error, so odd filenames can still be
//!   addressed directly.
//! - Entries that cannot be read while matching are skipped.
//!
//! An empty result is an ordinary value, not an error: "nothing matched" is
//! a condition each command interprets under its own force contract. A
//! wildcard-free pattern naming a missing entry also yields an empty list.
//! Result order is filesystem enumeration order and is not guaranteed
//! sorted.
//!
use glob::MatchOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Match options shared by every expansion.
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: true,
    }
}

/// Expands one pattern into the list of matching filesystem entries.
///
/// Never fails: pattern syntax errors fall back to a literal existence
/// check, and unreadable entries are skipped.
pub fn expand(pattern: &str) -> Vec<PathBuf> {
    match glob::glob_with(pattern, match_options()) {
        Ok(paths) => paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(err) => {
                    debug!("skipping unreadable entry while matching {pattern}: {err}");
                    None
                }
            })
            .collect(),
        Err(err) => {
            // Not a valid pattern: treat it as a literal path.
            debug!("pattern {pattern} did not parse ({err}); probing literally");
            let literal = Path::new(pattern);
            if literal.symlink_metadata().is_ok() {
                vec![literal.to_path_buf()]
            } else {
                Vec::new()
            }
        }
    }
}

/// Expands a pool of patterns into one combined match list, preserving
/// per-pattern order. Used by `mv` and `cp`, which gather all sources
/// before validating the destination.
pub fn expand_all(patterns: &[String]) -> Vec<PathBuf> {
    patterns.iter().flat_map(|p| expand(p)).collect()
}

// --- Unit Tests ---
// Absolute patterns are used throughout so tests never depend on the
// process working directory.
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn pattern(dir: &Path, tail: &str) -> String {
        format!("{}/{}", dir.display(), tail)
    }

    #[test]
    fn test_wildcard_matches() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("c.log"), "").unwrap();

        let mut names: Vec<_> = expand(&pattern(dir.path(), "*.txt"))
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let dir = tempdir().unwrap();
        assert!(expand(&pattern(dir.path(), "*.nope")).is_empty());
        // Wildcard-free pattern naming a missing entry: also empty.
        assert!(expand(&pattern(dir.path(), "absent.txt")).is_empty());
    }

    #[test]
    fn test_literal_pattern_matches_existing_entry() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "").unwrap();
        assert_eq!(expand(&pattern(dir.path(), "plain.txt")), vec![file]);
    }

    #[test]
    fn test_star_skips_dotfiles() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::write(dir.path().join("shown"), "").unwrap();

        let matches = expand(&pattern(dir.path(), "*"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].file_name().unwrap(), "shown");
    }

    #[test]
    fn test_invalid_pattern_probes_literally() {
        let dir = tempdir().unwrap();
        // "[" alone is not a valid glob pattern; create a file literally
        // named that and confirm the fallback finds it.
        let odd = dir.path().join("[");
        fs::write(&odd, "").unwrap();
        assert_eq!(expand(&pattern(dir.path(), "[")), vec![odd]);
        assert!(expand(&pattern(dir.path(), "[missing")).is_empty());
    }

    #[test]
    fn test_expand_all_pools_patterns() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.a"), "").unwrap();
        fs::write(dir.path().join("two.b"), "").unwrap();

        let pool = expand_all(&[pattern(dir.path(), "*.a"), pattern(dir.path(), "*.b")]);
        assert_eq!(pool.len(), 2);
    }
}
