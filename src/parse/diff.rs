//! parse::diff
//!
//! `git diff --numstat` output: `<added>\t<deleted>\t<path>`, with `-` in
//! both count columns for binary files.

use serde::Serialize;

use super::{lines, ParseError};

const PARSER: &str = "diff";

/// Line counts for one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStat {
    /// Added lines; `None` for binary files
    pub added: Option<u64>,
    /// Deleted lines; `None` for binary files
    pub deleted: Option<u64>,
    /// Path as printed; renames keep git's `old => new` notation
    pub path: String,
}

impl FileStat {
    pub fn is_binary(&self) -> bool {
        self.added.is_none() && self.deleted.is_none()
    }
}

/// Totals over a set of [`FileStat`]s; binary files count as changed only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub files: usize,
    pub insertions: u64,
    pub deletions: u64,
}

pub fn summarize(stats: &[FileStat]) -> DiffSummary {
    stats.iter().fold(
        DiffSummary::default(),
        |acc, stat| DiffSummary {
            files: acc.files + 1,
            insertions: acc.insertions + stat.added.unwrap_or(0),
            deletions: acc.deletions + stat.deleted.unwrap_or(0),
        },
    )
}

/// Parse numstat output.
///
/// # Errors
///
/// Returns [`ParseError`] for lines without three tab-separated columns or
/// with non-numeric counts.
pub fn parse(output: &str) -> Result<Vec<FileStat>, ParseError> {
    lines(output).map(|(i, line)| parse_line(i, line)).collect()
}

fn parse_line(index: usize, line: &str) -> Result<FileStat, ParseError> {
    let mut columns = line.splitn(3, '\t');
    let (added, deleted, path) = match (columns.next(), columns.next(), columns.next()) {
        (Some(a), Some(d), Some(p)) if !p.is_empty() => (a, d, p),
        _ => return Err(ParseError::new(PARSER, index, line, "expected three columns")),
    };

    let count = |column: &str| -> Result<Option<u64>, ParseError> {
        if column == "-" {
            return Ok(None);
        }
        column
            .parse()
            .map(Some)
            .map_err(|_| ParseError::new(PARSER, index, line, format!("bad count {:?}", column)))
    };

    Ok(FileStat {
        added: count(added)?,
        deleted: count(deleted)?,
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_binary() {
        let stats = parse("3\t1\tsrc/lib.rs\n-\t-\tlogo.png\n").unwrap();
        assert_eq!(stats[0].added, Some(3));
        assert_eq!(stats[0].deleted, Some(1));
        assert!(stats[1].is_binary());
        assert_eq!(stats[1].path, "logo.png");
    }

    #[test]
    fn rename_notation_kept() {
        let stats = parse("0\t0\tsrc/{a.rs => b.rs}\n").unwrap();
        assert_eq!(stats[0].path, "src/{a.rs => b.rs}");
    }

    #[test]
    fn summary_totals() {
        let stats = parse("3\t1\ta\n2\t0\tb\n-\t-\tc\n").unwrap();
        assert_eq!(
            summarize(&stats),
            DiffSummary {
                files: 3,
                insertions: 5,
                deletions: 1
            }
        );
    }

    #[test]
    fn malformed() {
        assert!(parse("3 1 a\n").is_err());
        let err = parse("x\t1\ta\n").unwrap_err();
        assert!(err.message.contains("bad count"));
    }
}
