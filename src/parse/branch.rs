//! parse::branch
//!
//! `git branch --list [-a]` output.
//!
//! ```text
//! * main
//! + checked-out-elsewhere
//!   feature
//! * (HEAD detached at 1a2b3c4)
//!   remotes/origin/HEAD -> origin/main
//!   remotes/origin/main
//! ```

use serde::Serialize;

use super::{lines, ParseError};

const PARSER: &str = "branch";

/// One listed branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchEntry {
    /// Name as listed, e.g. `main` or `remotes/origin/main`
    pub name: String,
    /// Checked out in this worktree
    pub current: bool,
    /// Checked out in another linked worktree
    pub worktree: bool,
    /// Remote name for `remotes/<remote>/...` entries
    pub remote: Option<String>,
    /// Target of a symbolic entry (`origin/HEAD -> origin/main`)
    pub target: Option<String>,
    /// The detached-HEAD pseudo entry
    pub detached: bool,
}

impl BranchEntry {
    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }
}

/// Parse a branch listing.
///
/// # Errors
///
/// Returns [`ParseError`] for lines without the two-column marker prefix.
pub fn parse(output: &str) -> Result<Vec<BranchEntry>, ParseError> {
    lines(output).map(|(i, line)| parse_line(i, line)).collect()
}

fn parse_line(index: usize, line: &str) -> Result<BranchEntry, ParseError> {
    let mut chars = line.chars();
    let marker = chars.next();
    if chars.next() != Some(' ') {
        return Err(ParseError::new(PARSER, index, line, "missing marker column"));
    }
    let (current, worktree) = match marker {
        Some('*') => (true, false),
        Some('+') => (false, true),
        Some(' ') => (false, false),
        _ => return Err(ParseError::new(PARSER, index, line, "unknown marker")),
    };

    let rest = line[2..].trim_end();
    if rest.is_empty() {
        return Err(ParseError::new(PARSER, index, line, "empty branch name"));
    }

    if rest.starts_with('(') && rest.ends_with(')') {
        return Ok(BranchEntry {
            name: rest[1..rest.len() - 1].to_string(),
            current,
            worktree,
            remote: None,
            target: None,
            detached: true,
        });
    }

    let (name, target) = match rest.split_once(" -> ") {
        Some((name, target)) => (name, Some(target.to_string())),
        None => (rest, None),
    };

    let remote = name
        .strip_prefix("remotes/")
        .and_then(|r| r.split_once('/'))
        .map(|(remote, _)| remote.to_string());

    Ok(BranchEntry {
        name: name.to_string(),
        current,
        worktree,
        remote,
        target,
        detached: false,
    })
}
