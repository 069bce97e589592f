//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging (overridden by `GITBIND_LOG`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitbind - declarative argument binding for the git command line
#[derive(Parser, Debug)]
#[command(name = "gitbind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitbind was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered command definitions
    Commands,

    /// Print the git arguments a definition produces, without running git
    #[command(
        long_about = "Bind arguments against a registered definition and print the \
            resulting git command line.\n\n\
            Nothing is executed. Binding errors (unknown options, conflicts, missing \
            operands) are reported exactly as the library reports them.",
        after_help = "\
EXAMPLES:
    # One operand fills the required slot
    gitbind render branch.copy new-name

    # Named values, flags and negations
    gitbind render commit --set message=wip --no verify

    # Repeat --set for repeatable options and key/value pairs
    gitbind render clone https://example.com/r.git --set config=core.autocrlf=false"
    )]
    Render {
        /// Definition name, e.g. `branch.copy` (see `gitbind commands`)
        command: String,

        /// Positional operands
        operands: Vec<String>,

        /// Named value as NAME=VALUE; repeat for lists and key/value pairs
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Set a flag to true
        #[arg(long = "flag", value_name = "NAME")]
        flags: Vec<String>,

        /// Set a flag to false (renders --no-NAME when negatable)
        #[arg(long = "no", value_name = "NAME")]
        negated: Vec<String>,

        /// Print tokens and execution-only values as JSON
        #[arg(long)]
        json: bool,
    },

    /// List branches
    Branches {
        /// Include remote-tracking branches
        #[arg(short, long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent commits
    Log {
        /// Limit the number of commits
        #[arg(short = 'n', long)]
        max_count: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show working tree status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tags as JSON
    Tags,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
