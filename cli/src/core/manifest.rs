//! # ShellRS Cargo Manifest Reader
//!
//! File: cli/src/core/manifest.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! This module loads the `[package]` table of a `Cargo.toml` manifest for the
//! `cargo-exec` command, which exports the package name and version to the
//! child process environment (`CARGO_CRATE_NAME`, `CARGO_PKG_NAME`,
//! `CARGO_PKG_VERSION`) before running a shell command line.
//!
//! ## Architecture
//!
//! A plain deserialize: read the file to a string, parse with `toml` into
//! serde-derived structs, attach context on failure. Only the fields
//! `cargo-exec` needs are modeled; unknown keys in the manifest are ignored.
//!
use crate::core::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The subset of a Cargo manifest that `cargo-exec` consumes.
#[derive(Deserialize, Debug, Clone)]
pub struct CargoManifest {
    /// The `[package]` table.
    pub package: Package,
}

/// The `[package]` table fields exported to the child environment.
#[derive(Deserialize, Debug, Clone)]
pub struct Package {
    /// Package name (`CARGO_CRATE_NAME` / `CARGO_PKG_NAME`).
    pub name: String,
    /// Package version (`CARGO_PKG_VERSION`).
    pub version: String,
}

impl CargoManifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the file cannot be read or is not a valid Cargo
    /// manifest with a `[package]` table containing `name` and `version`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest: CargoManifest = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
        Ok(manifest)
    }
}
