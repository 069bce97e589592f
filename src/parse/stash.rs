//! parse::stash
//!
//! `git stash list` in [`crate::commands::stash::STASH_FORMAT`]:
//! `stash@{N}\x1f<oid>\x1f<subject>` per line.

use serde::Serialize;

use super::{lines, ParseError};
use crate::core::types::Oid;

const PARSER: &str = "stash";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StashEntry {
    /// Position in the stash stack, 0 being the newest
    pub index: usize,
    /// Reflog selector, e.g. `stash@{0}`
    pub selector: String,
    pub oid: Oid,
    /// Reflog subject, e.g. `WIP on main: 1a2b3c4 message`
    pub subject: String,
}

pub fn parse(output: &str) -> Result<Vec<StashEntry>, ParseError> {
    lines(output).map(|(i, line)| parse_line(i, line)).collect()
}

fn parse_line(index: usize, line: &str) -> Result<StashEntry, ParseError> {
    let error = |message: String| ParseError::new(PARSER, index, line, message);

    let mut fields = line.splitn(3, '\x1f');
    let (selector, oid, subject) = match (fields.next(), fields.next(), fields.next()) {
        (Some(s), Some(o), Some(subject)) => (s, o, subject),
        _ => return Err(error("expected three fields".to_string())),
    };

    let position = selector
        .strip_prefix("stash@{")
        .and_then(|s| s.strip_suffix('}'))
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| error(format!("bad selector {:?}", selector)))?;

    Ok(StashEntry {
        index: position,
        selector: selector.to_string(),
        oid: Oid::new(oid).map_err(|e| error(e.to_string()))?,
        subject: subject.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OID: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn parses_entries() {
        let output = format!(
            "stash@{{0}}\x1f{OID}\x1fWIP on main: 0123456 tweak\n\
             stash@{{1}}\x1f{OID}\x1fOn main: saved\n"
        );
        let entries = parse(&output).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[0].subject, "WIP on main: 0123456 tweak");
        assert_eq!(entries[0].oid.as_str(), OID);
    }

    #[test]
    fn bad_selector() {
        let output = format!("stash@{{x}}\x1f{OID}\x1fs\n");
        assert!(parse(&output).unwrap_err().message.contains("bad selector"));
    }
}
