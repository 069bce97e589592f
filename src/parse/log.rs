//! parse::log
//!
//! Records produced by [`crate::commands::history::LOG_FORMAT`]: ten fields
//! separated by `\x1f`, each record terminated by `\x1e`.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::ParseError;
use crate::core::types::Oid;

const PARSER: &str = "log";
const FIELDS: usize = 10;

/// Author or committer identity with its timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub date: DateTime<FixedOffset>,
}

/// One commit from the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub oid: Oid,
    pub parents: Vec<Oid>,
    pub author: Signature,
    pub committer: Signature,
    /// First line of the message
    pub subject: String,
    /// Remainder of the message, trailing whitespace removed
    pub body: String,
}

impl Commit {
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Parse log output.
///
/// # Errors
///
/// Returns [`ParseError`] (numbered by record) for a wrong field count, an
/// invalid object id or an unparseable date.
pub fn parse(output: &str) -> Result<Vec<Commit>, ParseError> {
    output
        .split('\x1e')
        .map(|record| record.trim_start_matches(['\n', '\r']))
        .filter(|record| !record.trim().is_empty())
        .enumerate()
        .map(|(i, record)| parse_record(i, record))
        .collect()
}

fn parse_record(index: usize, record: &str) -> Result<Commit, ParseError> {
    let fields: Vec<&str> = record.split('\x1f').collect();
    if fields.len() != FIELDS {
        return Err(ParseError::new(
            PARSER,
            index,
            record,
            format!("expected {} fields, found {}", FIELDS, fields.len()),
        ));
    }

    let oid = |s: &str| {
        Oid::new(s).map_err(|e| ParseError::new(PARSER, index, record, e.to_string()))
    };
    let date = |s: &str| {
        DateTime::parse_from_rfc3339(s).map_err(|e| {
            ParseError::new(PARSER, index, record, format!("bad date {:?}: {}", s, e))
        })
    };

    Ok(Commit {
        oid: oid(fields[0])?,
        parents: fields[1]
            .split_whitespace()
            .map(&oid)
            .collect::<Result<_, _>>()?,
        author: Signature {
            name: fields[2].to_string(),
            email: fields[3].to_string(),
            date: date(fields[4])?,
        },
        committer: Signature {
            name: fields[5].to_string(),
            email: fields[6].to_string(),
            date: date(fields[7])?,
        },
        subject: fields[8].to_string(),
        body: fields[9].trim_end().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "1111111111111111111111111111111111111111";
    const B: &str = "2222222222222222222222222222222222222222";
    const C: &str = "3333333333333333333333333333333333333333";

    fn record(oid: &str, parents: &str, subject: &str, body: &str) -> String {
        [
            oid,
            parents,
            "Ada",
            "ada@example.com",
            "2024-03-01T10:00:00+01:00",
            "Bob",
            "bob@example.com",
            "2024-03-02T11:30:00Z",
            subject,
            body,
        ]
        .join("\x1f")
            + "\x1e\n"
    }

    #[test]
    fn parses_records() {
        let output = record(C, &format!("{} {}", A, B), "Merge topic", "")
            + &record(A, "", "Initial", "Long body\n\nwith paragraphs\n");
        let commits = parse(&output).unwrap();

        assert_eq!(commits.len(), 2);
        assert!(commits[0].is_merge());
        assert_eq!(commits[0].parents[1].as_str(), B);
        assert!(commits[1].is_root());
        assert_eq!(commits[1].body, "Long body\n\nwith paragraphs");
        assert_eq!(commits[1].author.email, "ada@example.com");
        assert_eq!(commits[1].author.date.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn fields_may_contain_tabs_and_newlines() {
        let output = record(A, "", "tab\there", "line\nline");
        let commits = parse(&output).unwrap();
        assert_eq!(commits[0].subject, "tab\there");
        assert_eq!(commits[0].body, "line\nline");
    }

    #[test]
    fn empty_output() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n").unwrap().is_empty());
    }

    #[test]
    fn wrong_field_count() {
        let err = parse("abc\x1fdef\x1e").unwrap_err();
        assert_eq!(err.parser, "log");
        assert!(err.message.contains("expected 10 fields"));
    }

    #[test]
    fn bad_date_is_reported() {
        let output = record(A, "", "s", "").replace("2024-03-02T11:30:00Z", "yesterday");
        let err = parse(&output).unwrap_err();
        assert!(err.message.contains("yesterday"));
    }

    #[test]
    fn bad_oid_is_reported() {
        let output = record("zzzz", "", "s", "");
        assert!(parse(&output).is_err());
    }
}
