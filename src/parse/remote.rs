//! parse::remote
//!
//! `git remote --verbose`: `<name>\t<url> (fetch|push)` per line, grouped
//! into one record per remote in listing order.

use serde::Serialize;

use super::{lines, ParseError};

const PARSER: &str = "remote";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Remote {
    pub name: String,
    pub fetch_url: Option<String>,
    pub push_url: Option<String>,
}

pub fn parse(output: &str) -> Result<Vec<Remote>, ParseError> {
    let mut remotes: Vec<Remote> = Vec::new();
    for (i, line) in lines(output) {
        let (name, rest) = line
            .split_once('\t')
            .ok_or_else(|| ParseError::new(PARSER, i, line, "missing tab"))?;
        let (url, direction) = rest
            .rsplit_once(' ')
            .ok_or_else(|| ParseError::new(PARSER, i, line, "missing direction"))?;

        let position = match remotes.iter().position(|r| r.name == name) {
            Some(p) => p,
            None => {
                remotes.push(Remote {
                    name: name.to_string(),
                    ..Default::default()
                });
                remotes.len() - 1
            }
        };
        let remote = &mut remotes[position];

        match direction {
            "(fetch)" => remote.fetch_url = Some(url.to_string()),
            "(push)" => remote.push_url = Some(url.to_string()),
            other => {
                return Err(ParseError::new(
                    PARSER,
                    i,
                    line,
                    format!("unknown direction {:?}", other),
                ))
            }
        }
    }
    Ok(remotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_name() {
        let output = "\
origin\thttps://example.com/a.git (fetch)
origin\thttps://example.com/a.git (push)
mirror\t/srv/mirror.git (fetch)
mirror\tssh://push.example.com/m.git (push)
";
        let remotes = parse(output).unwrap();
        assert_eq!(remotes.len(), 2);
        assert_eq!(remotes[0].name, "origin");
        assert_eq!(remotes[1].fetch_url.as_deref(), Some("/srv/mirror.git"));
        assert_eq!(
            remotes[1].push_url.as_deref(),
            Some("ssh://push.example.com/m.git")
        );
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = parse("origin\turl (pull)\n").unwrap_err();
        assert!(err.message.contains("pull"));
    }
}
