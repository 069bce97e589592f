//! parse::config
//!
//! `git config --list`: `key=value` per line. A key without `=` is a
//! boolean set by bare presence in the config file.

use serde::Serialize;

use super::{lines, ParseError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    /// Fully qualified key, e.g. `remote.origin.url`
    pub key: String,
    /// `None` for a bare key
    pub value: Option<String>,
}

/// Parse a config listing. Multi-valued keys appear once per value, in order.
///
/// # Errors
///
/// Returns [`ParseError`] for keys without a section (`.`).
pub fn parse(output: &str) -> Result<Vec<ConfigEntry>, ParseError> {
    lines(output)
        .map(|(i, line)| {
            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key, Some(value.to_string())),
                None => (line, None),
            };
            if !key.contains('.') || key.starts_with('.') {
                return Err(ParseError::new("config", i, line, "key has no section"));
            }
            Ok(ConfigEntry {
                key: key.to_string(),
                value,
            })
        })
        .collect()
}

/// Last value of `key`, the one git itself would use.
pub fn last_value<'a>(entries: &'a [ConfigEntry], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .rev()
        .find(|e| e.key == key)
        .and_then(|e| e.value.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_bare_keys() {
        let output = "user.name=Ada\ncore.bare=false\nfeature.flag\nuser.name=Ada L\n";
        let entries = parse(output).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].value, None);
        assert_eq!(last_value(&entries, "user.name"), Some("Ada L"));
    }

    #[test]
    fn value_may_contain_equals() {
        let entries = parse("alias.x=log --format=%H\n").unwrap();
        assert_eq!(entries[0].value.as_deref(), Some("log --format=%H"));
    }

    #[test]
    fn key_without_section() {
        assert!(parse("nosection=1\n").is_err());
    }
}
