//! gitbind - declarative argument binding for the git command line
//!
//! gitbind turns declarative descriptions of git subcommands into validated
//! argument vectors, runs them, and parses the text git prints back into
//! typed records.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`core`] - The argument engine, domain types and configuration
//! - [`commands`] - Static definitions for each wrapped git operation
//! - [`exec`] - Subprocess execution behind the `Runner` trait
//! - [`parse`] - Parsers for git's text output
//! - [`git`] - The facade tying definitions, execution and parsing together
//! - [`cli`] - Command-line interface layer
//!
//! # Correctness Invariants
//!
//! 1. A definition is validated once, when it is built, and never changes
//! 2. Binding is all-or-nothing: a call either yields tokens or an error
//! 3. Defaults never count as caller-supplied for cross-option rules
//! 4. Execution-only values never reach the argument vector

pub mod cli;
pub mod commands;
pub mod core;
pub mod exec;
pub mod git;
pub mod parse;
