//! git
//!
//! Single interface for running git operations.
//!
//! # Architecture
//!
//! This module is the doorway from typed Rust calls to the git binary.
//! Each method binds a static definition from [`crate::commands`], runs it
//! through a [`crate::exec::Runner`], and parses the output with
//! [`crate::parse`].
//!
//! # Responsibilities
//!
//! - Repository discovery (`rev-parse --show-toplevel`)
//! - Merging execution-only values with configured defaults
//! - Validating new branch names before git sees them
//! - Reading bound values back for orchestration
//!
//! # Example
//!
//! ```no_run
//! use gitbind::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new(".")).unwrap();
//! let head = git.rev_parse("HEAD").unwrap();
//! let copied = git.copy_branch(None, "backup", false).unwrap();
//! println!("{} copied to {}", head.short(7), copied);
//! ```

mod interface;

pub use interface::{Git, GitError, ResetMode};
