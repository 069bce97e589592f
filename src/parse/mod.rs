//! parse
//!
//! Parsers for git's text output.
//!
//! Every parser is a pure function from captured stdout to `serde`
//! serializable records. They expect exactly the output shape produced by
//! the matching definition in [`crate::commands`]; a line that does not fit
//! is reported as a [`ParseError`] carrying the parser name, the 1-based
//! line (or record) number and its content.
//!
//! | Parser      | Command                                   |
//! |-------------|-------------------------------------------|
//! | [`branch`]  | `git branch --list [-a]`                  |
//! | [`log`]     | `git log --format=<LOG_FORMAT>`           |
//! | [`status`]  | `git status --porcelain=v1 [-b]`          |
//! | [`diff`]    | `git diff --numstat`                      |
//! | [`tag`]     | `git tag --list`                          |
//! | [`stash`]   | `git stash list --format=<STASH_FORMAT>`  |
//! | [`config`]  | `git config --list`                       |
//! | [`remote`]  | `git remote --verbose`                    |

pub mod branch;
pub mod config;
pub mod diff;
pub mod log;
pub mod remote;
pub mod stash;
pub mod status;
pub mod tag;

use thiserror::Error;

/// A line of git output that did not match the expected shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot parse {parser} output at line {line} ({content:?}): {message}")]
pub struct ParseError {
    /// Which parser rejected the input
    pub parser: &'static str,
    /// 1-based line or record number
    pub line: usize,
    /// The offending text
    pub content: String,
    /// What was wrong with it
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(
        parser: &'static str,
        index: usize,
        content: &str,
        message: impl Into<String>,
    ) -> Self {
        ParseError {
            parser,
            line: index + 1,
            content: content.to_string(),
            message: message.into(),
        }
    }
}

/// Non-empty lines paired with their 0-based index.
pub(crate) fn lines(output: &str) -> impl Iterator<Item = (usize, &str)> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_one_based() {
        let err = ParseError::new("tag", 0, "bad tag", "whitespace in tag name");
        assert_eq!(err.line, 1);
        assert_eq!(
            err.to_string(),
            "cannot parse tag output at line 1 (\"bad tag\"): whitespace in tag name"
        );
    }

    #[test]
    fn lines_skip_blank() {
        let collected: Vec<_> = lines("a\n\n  \nb\n").collect();
        assert_eq!(collected, vec![(0, "a"), (3, "b")]);
    }
}
