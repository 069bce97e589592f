//! parse::tag
//!
//! `git tag --list`: one tag name per line.

use super::{lines, ParseError};

/// Parse a tag listing.
///
/// # Errors
///
/// Returns [`ParseError`] for a line containing whitespace, which git never
/// allows in a ref name.
pub fn parse(output: &str) -> Result<Vec<String>, ParseError> {
    lines(output)
        .map(|(i, line)| {
            if line.contains(char::is_whitespace) {
                Err(ParseError::new("tag", i, line, "whitespace in tag name"))
            } else {
                Ok(line.to_string())
            }
        })
        .collect()
}
