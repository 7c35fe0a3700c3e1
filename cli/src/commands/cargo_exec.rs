//! # ShellRS Cargo-Exec Command
//!
//! File: cli/src/commands/cargo_exec.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs cargo-exec <manifest-or-dir> <command line...>`:
//! runs a shell command line with the named package's identity exported,
//! the way cargo itself exports it to build scripts. Lets makefile targets
//! invoke tools that expect `CARGO_PKG_NAME`/`CARGO_PKG_VERSION` without
//! being driven by cargo.
//!
//! ## Workflow
//!
//! 1. The first argument names a `Cargo.toml` directly (`*.toml`) or the
//!    directory containing one. If the same relative path exists under
//!    `$CARGO_WORKSPACE_DIR`, that copy wins — matching how the build
//!    system passes workspace-relative manifest paths.
//! 2. Parse the manifest's `[package]` table.
//! 3. Join the remaining arguments into one line and run it through the
//!    platform shell with `CARGO_CRATE_NAME`, `CARGO_PKG_NAME`,
//!    `CARGO_PKG_VERSION`, and `CARGO_MAKE_TIMESTAMP` set in the child
//!    environment only — the parent process stays clean.
//! 4. Exit with the child's status.
//!
use crate::commands::timestamp::unix_timestamp;
use crate::common::process;
use crate::core::error::{Result, EFAIL};
use crate::core::manifest::CargoManifest;
use crate::core::options::Invocation;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the manifest path from the first argument and
/// `$CARGO_WORKSPACE_DIR`.
fn resolve_manifest(arg: &str) -> PathBuf {
    let workspace = env::var("CARGO_WORKSPACE_DIR").unwrap_or_else(|_| ".".to_string());
    let relative = if arg.ends_with(".toml") {
        PathBuf::from(arg)
    } else {
        Path::new(arg).join("Cargo.toml")
    };
    let in_workspace = Path::new(&workspace).join(&relative);
    if in_workspace.is_file() {
        in_workspace
    } else {
        relative
    }
}

/// Handler for `cargo-exec`.
pub fn run(inv: &Invocation) -> Result<i32> {
    if inv.args.is_empty() {
        eprintln!("Invalid parameter [] for cargo-exec");
        return Ok(EFAIL);
    }
    let manifest_path = resolve_manifest(&inv.args[0]);
    debug!("using manifest {}", manifest_path.display());
    let manifest = CargoManifest::load(&manifest_path)?;

    let line = inv.args[1..].join(" ");
    let envs = [
        ("CARGO_CRATE_NAME", manifest.package.name.clone()),
        ("CARGO_PKG_NAME", manifest.package.name.clone()),
        ("CARGO_PKG_VERSION", manifest.package.version.clone()),
        ("CARGO_MAKE_TIMESTAMP", unix_timestamp()),
    ];
    process::run_shell_line(&line, &envs)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::Options;
    use std::fs;
    use tempfile::tempdir;

    fn invocation(args: Vec<String>) -> Invocation {
        Invocation {
            command: "cargo-exec".to_string(),
            args,
            options: Options::default(),
        }
    }

    fn write_manifest(dir: &Path) {
        fs::write(
            dir.join("Cargo.toml"),
            "[package]\nname = \"probe\"\nversion = \"2.7.1\"\n",
        )
        .unwrap();
    }

    #[test]
    fn test_resolve_manifest_appends_file_name() {
        let resolved = resolve_manifest("crates/probe");
        assert!(resolved.ends_with("crates/probe/Cargo.toml"));
        let direct = resolve_manifest("crates/probe/Cargo.toml");
        assert!(direct.ends_with("crates/probe/Cargo.toml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_cargo_exec_exports_package_env() -> Result<()> {
        let dir = tempdir()?;
        write_manifest(dir.path());

        let out = dir.path().join("captured.txt");
        let inv = invocation(vec![
            dir.path().display().to_string(),
            format!(
                "echo \"$CARGO_PKG_NAME $CARGO_PKG_VERSION\" > {}",
                out.display()
            ),
        ]);
        assert_eq!(run(&inv)?, 0);
        assert_eq!(fs::read_to_string(&out)?.trim(), "probe 2.7.1");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_cargo_exec_propagates_child_status() -> Result<()> {
        let dir = tempdir()?;
        write_manifest(dir.path());

        let inv = invocation(vec![dir.path().display().to_string(), "exit 5".to_string()]);
        assert_eq!(run(&inv)?, 5);
        Ok(())
    }

    #[test]
    fn test_cargo_exec_requires_a_manifest_argument() -> Result<()> {
        assert_eq!(run(&invocation(vec![]))?, EFAIL);
        Ok(())
    }

    #[test]
    fn test_cargo_exec_missing_manifest_is_an_error() {
        let dir = tempdir().unwrap();
        let inv = invocation(vec![
            dir.path().join("nowhere").display().to_string(),
            "true".to_string(),
        ]);
        assert!(run(&inv).is_err());
    }
}
