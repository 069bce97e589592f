//! cli
//!
//! Command-line interface layer for gitbind.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. `render` and `commands` work on the definitions
//! in [`crate::commands`] directly; everything that touches a repository
//! goes through [`crate::git::Git`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GITBIND_LOG";

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let ctx = commands::Context {
        cwd: match cli.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir()?,
        },
        debug: cli.debug,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Log to stderr, filtered by `GITBIND_LOG`, else `debug` with `--debug`
/// and `warn` otherwise.
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
