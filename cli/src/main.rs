//! # ShellRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Project: ShellRS — portable shell file operations for build scripts
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ShellRS CLI. It
//! handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Racing the dispatched command against Ctrl-C
//! - Converting results and interrupts into process exit statuses
//!
//! ## Architecture
//!
//! ShellRS is a flat command set, not a subcommand tree: one shared flag
//! pool (`core::options::Options`), one positional command name, and the
//! command's own positional arguments. The dispatcher in `commands::` maps
//! the name to a handler; this file owns everything around that call.
//!
//! Exit statuses: 0 success, 1 generic failure, 2 version-compare "less",
//! 7 not-found (`ndk-root`), 8 invalid invocation, 254 interrupted.
//!
//! ## Examples
//!
//! Basic ShellRS usage:
//!
//! ```bash
//! # Remove build output, quietly, even if absent
//! shellrs rm -rf target/debug
//!
//! # Translate a Windows path for a WSL toolchain
//! shellrs win2wsl-path 'C:\Users\x'
//!
//! # List every registered command
//! shellrs --list
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Run the dispatcher on a blocking thread, racing `ctrl_c()`
//! 4. Map the outcome (status, error, or interrupt) to the exit status
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (rm, mkdir, upload, etc.)
mod common; // Contains shared utilities (fs, network, process, system)
mod core; // Core infrastructure (errors, options, manifest)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "shellrs",
    about = "🦀 ShellRS 🐚: Portable Shell File Operations for Build Scripts",
    long_about = "Re-implements the POSIX shell file operations build scripts rely on\n\
                  (rm, mkdir, mv, cp, symlinks, touch, path translation, upload) as one\n\
                  dispatchable command set that behaves identically on every host.",
    version
)]
struct Cli {
    /// The shared flag pool every command draws from.
    #[command(flatten)]
    options: core::options::Options,

    /// Increases log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The command to run (see --list for all names).
    command: Option<String>,

    /// The command's positional arguments.
    #[arg(num_args = 0..)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    // --list short-circuits dispatch entirely.
    if cli.options.list_cmds {
        commands::list_commands();
        std::process::exit(crate::core::error::EOK);
    }

    let invocation = core::options::Invocation {
        command: cli.command.unwrap_or_default(),
        args: cli.args,
        options: cli.options,
    };

    // The operations are synchronous and blocking by design; run them on a
    // blocking thread and race the interrupt signal against completion.
    let worker = tokio::task::spawn_blocking(move || commands::dispatch(&invocation));
    let status = tokio::select! {
        joined = worker => match joined {
            Ok(Ok(code)) => code,
            Ok(Err(err)) => {
                // One visible diagnostic line per failure; the chain goes
                // to the debug log.
                tracing::debug!("Command execution failed: {:?}", err);
                eprintln!("Error: {}", err);
                crate::core::error::exit_code_for(&err)
            }
            Err(join_err) => {
                tracing::error!("Command task failed: {:?}", join_err);
                eprintln!("Error: {}", join_err);
                crate::core::error::EFAIL
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("^C");
            crate::core::error::ShellError::Interrupted.exit_code()
        }
    };
    std::process::exit(status);
}
