//! # ShellRS Windows Registry Lookup
//!
//! File: cli/src/common/system/registry.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Backs the `winreg` command: given queries of the form
//! `ROOT\sub\key\VALUE`, returns the first non-empty string value found.
//! Build scripts use this to locate installed toolchains
//! (`HKEY_LOCAL_MACHINE\SOFTWARE\...\InstallDir`) without shelling out to
//! `reg.exe`.
//!
//! ## Architecture
//!
//! Only Windows has a registry; other targets compile a stub that answers
//! `Unsupported`, which the command layer converts to an empty string and
//! a success status. On Windows the lookup opens keys with
//! `KEY_WOW64_64KEY`, so a 32-bit build still reads the 64-bit view that
//! installers write to. Queries that fail to parse or open are skipped,
//! never fatal.
//!
use crate::core::error::ShellError;

/// Splits one `ROOT\sub\key\VALUE` query into (root, subkey, value name).
///
/// Returns `None` when there are not at least a root and a value name.
#[allow(dead_code)] // The non-Windows stub below never parses queries.
fn split_query(query: &str) -> Option<(&str, String, &str)> {
    let parts: Vec<&str> = query.split('\\').collect();
    if parts.len() < 2 {
        return None;
    }
    let root = parts[0];
    let value_name = parts[parts.len() - 1];
    let sub_key = parts[1..parts.len() - 1].join("\\");
    Some((root, sub_key, value_name))
}

/// Returns the first non-empty registry value named by `queries`.
#[cfg(windows)]
pub fn read_first_value(queries: &[String]) -> Result<Option<String>, ShellError> {
    use tracing::debug;
    use winreg::enums::{
        HKEY_CLASSES_ROOT, HKEY_CURRENT_CONFIG, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE,
        HKEY_PERFORMANCE_DATA, HKEY_USERS, KEY_READ, KEY_WOW64_64KEY,
    };
    use winreg::RegKey;

    fn root_key(name: &str) -> Option<winreg::HKEY> {
        match name {
            "HKEY_CLASSES_ROOT" => Some(HKEY_CLASSES_ROOT),
            "HKEY_CURRENT_USER" => Some(HKEY_CURRENT_USER),
            "HKEY_LOCAL_MACHINE" => Some(HKEY_LOCAL_MACHINE),
            "HKEY_USERS" => Some(HKEY_USERS),
            "HKEY_PERFORMANCE_DATA" => Some(HKEY_PERFORMANCE_DATA),
            "HKEY_CURRENT_CONFIG" => Some(HKEY_CURRENT_CONFIG),
            _ => None,
        }
    }

    for query in queries {
        let Some((root_name, sub_key, value_name)) = split_query(query) else {
            debug!("skipping malformed registry query {query}");
            continue;
        };
        let Some(root) = root_key(root_name) else {
            debug!("skipping unknown registry root {root_name}");
            continue;
        };
        let opened =
            RegKey::predef(root).open_subkey_with_flags(&sub_key, KEY_READ | KEY_WOW64_64KEY);
        if let Ok(key) = opened {
            if let Ok(value) = key.get_value::<String, _>(value_name) {
                if !value.is_empty() {
                    return Ok(Some(value));
                }
            }
        }
    }
    Ok(None)
}

/// Non-Windows stub: there is no registry to read.
#[cfg(not(windows))]
pub fn read_first_value(_queries: &[String]) -> Result<Option<String>, ShellError> {
    Err(ShellError::Unsupported("winreg".to_string()))
}
