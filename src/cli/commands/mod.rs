//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens the repository when it needs one
//! 2. Calls the facade or the engine
//! 3. Formats and displays output
//!
//! Record-producing commands print JSON with `--json`.

mod completion;
mod list;
mod records;
mod render;

pub use completion::completion;
pub use list::list;
pub use records::{branches, log, status, tags};
pub use render::render;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::git::Git;

/// Per-invocation settings derived from global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory to run in
    pub cwd: PathBuf,
    /// `--debug` was given
    pub debug: bool,
}

impl Context {
    /// Open the repository containing `cwd`.
    pub fn repo(&self) -> Result<Git> {
        Git::open(&self.cwd)
            .with_context(|| format!("failed to open repository at {}", self.cwd.display()))
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Commands => list::list(),
        Command::Render {
            command,
            operands,
            set,
            flags,
            negated,
            json,
        } => render::render(&command, &operands, &set, &flags, &negated, json),
        Command::Branches { all, json } => records::branches(ctx, all, json),
        Command::Log { max_count, json } => records::log(ctx, max_count, json),
        Command::Status { json } => records::status(ctx, json),
        Command::Tags => records::tags(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
