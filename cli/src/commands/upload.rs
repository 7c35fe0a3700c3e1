//! # ShellRS Upload Command
//!
//! File: cli/src/commands/upload.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! Implements `shellrs upload <url> [<local[=remote]>...]`: pushes build
//! artifacts to an FTP, FTPS, or SFTP server.
//!
//! ## Workflow
//!
//! 1. Parse the destination URL (scheme, host, port, credentials, base
//!    path). A missing hostname or foreign scheme is an invalid-argument
//!    failure before anything connects.
//! 2. Connect once; the connection lives for the whole command.
//! 3. Each remaining argument is `local[=remote]`; the local half is
//!    glob-expanded and every non-directory match is uploaded to its
//!    resolved remote path (see `common::network::upload::resolve_remote`).
//! 4. Print `Upload "<local>"` / `    to "<url><remote>" ...` per file
//!    (FTP adds a progress dot per 32 KiB block) and `Done.` at the end.
//!
//! A dropped connection or refused login is not a per-item condition —
//! it propagates as an error and aborts the process with the generic
//! failure status.
//!
use crate::common::fs::glob;
use crate::common::network::upload::{resolve_remote, RemoteClient, UploadTarget};
use crate::core::error::{Result, EFAIL, EOK};
use crate::core::options::Invocation;
use std::io::{self, Write};

/// Handler for `upload`.
pub fn run(inv: &Invocation) -> Result<i32> {
    if inv.args.len() < 2 {
        eprintln!("Invalid parameter {:?} for upload", inv.args);
        return Ok(EFAIL);
    }
    let target = UploadTarget::parse(&inv.args[0])?;
    let display_url = target.display_url();
    let mut client = RemoteClient::connect(&target)?;

    for item in &inv.args[1..] {
        let (pattern, remote_spec) = match item.split_once('=') {
            Some((local, remote)) => (local, Some(remote)),
            None => (item.as_str(), None),
        };
        for local in glob::expand(pattern) {
            if local.is_dir() {
                continue;
            }
            let remote = resolve_remote(remote_spec, &local, &target.base_path);
            println!("Upload \"{}\"", local.display());
            print!("    to \"{display_url}{remote}\" ...");
            let _ = io::stdout().flush();
            client.upload(&local, &remote)?;
            println!();
        }
    }
    println!("Done.");

    client.close()?;
    Ok(EOK)
}

// --- Unit Tests ---
// The transfer paths need a live server and are exercised by the upload
// integration environment; argument validation is covered here.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{exit_code_for, EINVAL};
    use crate::core::options::Options;

    fn invocation(args: Vec<String>) -> Invocation {
        Invocation {
            command: "upload".to_string(),
            args,
            options: Options::default(),
        }
    }

    #[test]
    fn test_upload_requires_url_and_files() -> Result<()> {
        assert_eq!(run(&invocation(vec![]))?, EFAIL);
        assert_eq!(
            run(&invocation(vec!["ftp://host/".to_string()]))?,
            EFAIL
        );
        Ok(())
    }

    #[test]
    fn test_upload_rejects_bad_destinations() {
        let err = run(&invocation(vec![
            "no-scheme-here".to_string(),
            "a.txt".to_string(),
        ]))
        .unwrap_err();
        assert_eq!(exit_code_for(&err), EINVAL);

        let err = run(&invocation(vec![
            "http://host/base".to_string(),
            "a.txt".to_string(),
        ]))
        .unwrap_err();
        assert_eq!(exit_code_for(&err), EINVAL);
        assert!(err.to_string().contains("Unsupported protocol"));
    }
}
