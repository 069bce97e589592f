//! parse::status
//!
//! `git status --porcelain=v1 [--branch]` output.
//!
//! Each entry line is `XY <path>` or, for renames and copies,
//! `XY <orig> -> <path>`. Paths with unusual characters are C-quoted by git
//! and unquoted here. With `--branch` the first line is a `## ` header.

use serde::Serialize;

use super::{lines, ParseError};

const PARSER: &str = "status";

/// One changed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    /// Index (staged) status letter
    pub index: char,
    /// Working tree status letter
    pub worktree: char,
    pub path: String,
    /// Source path of a rename or copy
    pub original_path: Option<String>,
}

impl StatusEntry {
    pub fn is_untracked(&self) -> bool {
        self.index == '?' && self.worktree == '?'
    }

    pub fn is_ignored(&self) -> bool {
        self.index == '!' && self.worktree == '!'
    }

    pub fn is_conflicted(&self) -> bool {
        matches!(
            (self.index, self.worktree),
            ('U', _) | (_, 'U') | ('A', 'A') | ('D', 'D')
        )
    }

    pub fn is_staged(&self) -> bool {
        !matches!(self.index, ' ' | '?' | '!') && !self.is_conflicted()
    }

    pub fn is_modified_in_worktree(&self) -> bool {
        !matches!(self.worktree, ' ' | '?' | '!') && !self.is_conflicted()
    }
}

/// The `## ` header emitted with `--branch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchHeader {
    /// Branch name, or `HEAD (no branch)` when detached
    pub head: String,
    pub upstream: Option<String>,
    pub ahead: u32,
    pub behind: u32,
    /// The upstream is configured but no longer exists
    pub gone: bool,
    /// The branch has no commits yet
    pub unborn: bool,
}

/// Parsed status output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub branch: Option<BranchHeader>,
    pub entries: Vec<StatusEntry>,
}

impl Status {
    /// No tracked changes and no conflicts; untracked and ignored paths are
    /// not counted.
    pub fn is_clean(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.is_untracked() || e.is_ignored())
    }

    pub fn staged(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(|e| e.is_staged())
    }

    pub fn conflicted(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(|e| e.is_conflicted())
    }

    pub fn untracked(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(|e| e.is_untracked())
    }
}

/// Parse porcelain v1 status output.
///
/// # Errors
///
/// Returns [`ParseError`] for lines shorter than `XY p`, a missing
/// separator space, or a malformed branch header.
pub fn parse(output: &str) -> Result<Status, ParseError> {
    let mut status = Status::default();
    for (i, line) in lines(output) {
        if let Some(header) = line.strip_prefix("## ") {
            status.branch = Some(parse_header(i, line, header)?);
        } else {
            status.entries.push(parse_entry(i, line)?);
        }
    }
    Ok(status)
}

fn parse_entry(index: usize, line: &str) -> Result<StatusEntry, ParseError> {
    let mut chars = line.chars();
    let (x, y, sep) = match (chars.next(), chars.next(), chars.next()) {
        (Some(x), Some(y), Some(sep)) => (x, y, sep),
        _ => return Err(ParseError::new(PARSER, index, line, "line too short")),
    };
    if sep != ' ' || !x.is_ascii() || !y.is_ascii() {
        return Err(ParseError::new(PARSER, index, line, "expected `XY <path>`"));
    }
    let rest = &line[3..];
    if rest.is_empty() {
        return Err(ParseError::new(PARSER, index, line, "missing path"));
    }

    let (original_path, path) = if matches!(x, 'R' | 'C') || matches!(y, 'R' | 'C') {
        match split_rename(rest) {
            Some((from, to)) => (Some(unquote(from)), unquote(to)),
            None => {
                return Err(ParseError::new(
                    PARSER,
                    index,
                    line,
                    "rename without `->`",
                ))
            }
        }
    } else {
        (None, unquote(rest))
    };

    Ok(StatusEntry {
        index: x,
        worktree: y,
        path,
        original_path,
    })
}

/// Split `from -> to`, ignoring arrows inside quoted paths.
fn split_rename(rest: &str) -> Option<(&str, &str)> {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ' ' if !in_quotes && rest[i..].starts_with(" -> ") => {
                return Some((&rest[..i], &rest[i + 4..]));
            }
            _ => {}
        }
    }
    None
}

/// Undo git's C-style path quoting (`core.quotePath`).
fn unquote(path: &str) -> String {
    let inner = match path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
    {
        Some(inner) => inner,
        None => return path.to_string(),
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'n') => bytes.push(b'\n'),
            Some(b't') => bytes.push(b'\t'),
            Some(b'r') => bytes.push(b'\r'),
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b'f') => bytes.push(0x0c),
            Some(b'v') => bytes.push(0x0b),
            Some(d @ b'0'..=b'7') => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&o @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(o - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(value as u8);
            }
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn parse_header(index: usize, line: &str, header: &str) -> Result<BranchHeader, ParseError> {
    for prefix in ["No commits yet on ", "Initial commit on "] {
        if let Some(head) = header.strip_prefix(prefix) {
            return Ok(BranchHeader {
                head: head.to_string(),
                unborn: true,
                ..Default::default()
            });
        }
    }

    let (refs, tracking) = match header.split_once(" [") {
        Some((refs, tracking)) => match tracking.strip_suffix(']') {
            Some(tracking) => (refs, Some(tracking)),
            None => return Err(ParseError::new(PARSER, index, line, "unterminated `[`")),
        },
        None => (header, None),
    };

    let mut result = match refs.split_once("...") {
        Some((head, upstream)) => BranchHeader {
            head: head.to_string(),
            upstream: Some(upstream.to_string()),
            ..Default::default()
        },
        None => BranchHeader {
            head: refs.to_string(),
            ..Default::default()
        },
    };

    for part in tracking.into_iter().flat_map(|t| t.split(", ")) {
        let count = |n: &str| {
            n.parse::<u32>()
                .map_err(|_| ParseError::new(PARSER, index, line, format!("bad count {:?}", n)))
        };
        if part == "gone" {
            result.gone = true;
        } else if let Some(n) = part.strip_prefix("ahead ") {
            result.ahead = count(n)?;
        } else if let Some(n) = part.strip_prefix("behind ") {
            result.behind = count(n)?;
        } else {
            return Err(ParseError::new(
                PARSER,
                index,
                line,
                format!("unknown tracking state {:?}", part),
            ));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod entries {
        use super::*;

        #[test]
        fn basic_letters() {
            let status = parse(" M src/lib.rs\nA  new.txt\n?? scratch/\n!! target/\n").unwrap();
            assert_eq!(status.entries.len(), 4);

            assert!(status.entries[0].is_modified_in_worktree());
            assert!(!status.entries[0].is_staged());
            assert!(status.entries[1].is_staged());
            assert!(status.entries[2].is_untracked());
            assert!(status.entries[3].is_ignored());
            assert!(!status.is_clean());
        }

        #[test]
        fn rename_has_original() {
            let status = parse("R  old.rs -> new.rs\n").unwrap();
            let entry = &status.entries[0];
            assert_eq!(entry.path, "new.rs");
            assert_eq!(entry.original_path.as_deref(), Some("old.rs"));
        }

        #[test]
        fn quoted_paths() {
            let status = parse("?? \"with space.txt\"\n?? \"caf\\303\\251.txt\"\n").unwrap();
            assert_eq!(status.entries[0].path, "with space.txt");
            assert_eq!(status.entries[1].path, "café.txt");
        }

        #[test]
        fn quoted_rename_with_arrow_in_name() {
            let status = parse("R  \"a -> b\" -> c\n").unwrap();
            assert_eq!(status.entries[0].original_path.as_deref(), Some("a -> b"));
            assert_eq!(status.entries[0].path, "c");
        }

        #[test]
        fn conflicts() {
            let status = parse("UU both.txt\nAA added.txt\n").unwrap();
            assert_eq!(status.conflicted().count(), 2);
            assert_eq!(status.staged().count(), 0);
        }

        #[test]
        fn clean_ignores_untracked() {
            assert!(parse("").unwrap().is_clean());
            assert!(parse("?? new\n").unwrap().is_clean());
        }

        #[test]
        fn malformed_line() {
            let err = parse("M\n").unwrap_err();
            assert_eq!(err.parser, "status");
            assert_eq!(err.line, 1);
        }
    }

    mod header {
        use super::*;

        #[test]
        fn tracking_counts() {
            let status = parse("## main...origin/main [ahead 2, behind 1]\n").unwrap();
            let branch = status.branch.unwrap();
            assert_eq!(branch.head, "main");
            assert_eq!(branch.upstream.as_deref(), Some("origin/main"));
            assert_eq!((branch.ahead, branch.behind), (2, 1));
        }

        #[test]
        fn no_upstream() {
            let branch = parse("## topic\n").unwrap().branch.unwrap();
            assert_eq!(branch.head, "topic");
            assert!(branch.upstream.is_none());
        }

        #[test]
        fn unborn_branch() {
            let branch = parse("## No commits yet on main\n").unwrap().branch.unwrap();
            assert!(branch.unborn);
            assert_eq!(branch.head, "main");
        }

        #[test]
        fn gone_upstream() {
            let branch = parse("## main...origin/main [gone]\n").unwrap().branch.unwrap();
            assert!(branch.gone);
        }

        #[test]
        fn unknown_tracking_state() {
            assert!(parse("## main...origin/main [sideways 3]\n").is_err());
        }
    }
}
