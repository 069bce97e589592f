//! core::args::error
//!
//! Error types for the Arguments engine.
//!
//! Two categories exist and never mix:
//!
//! - [`DefinitionError`]: the declaration itself is broken. Raised by
//!   [`SpecBuilder::build`](super::SpecBuilder::build), never at call time.
//! - [`ArgumentError`]: a particular call supplied arguments the declaration
//!   rejects. Raised synchronously by [`Spec::bind`](super::Spec::bind) with
//!   no partial result.

use thiserror::Error;

/// A Specification could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// An option or operand was declared with no names.
    #[error("declared item has no names")]
    EmptyNames,

    /// Two declared items share a name or alias.
    #[error("duplicate argument name '{name}'")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// A constraint references a name that is not declared.
    #[error("{constraint} references undeclared name '{name}'")]
    UnknownName {
        /// The undeclared name
        name: String,
        /// Which constraint kind referenced it
        constraint: &'static str,
    },

    /// More than one repeatable operand was declared.
    #[error("at most one repeatable operand is allowed, found '{first}' and '{second}'")]
    MultipleRepeatable { first: String, second: String },

    /// An optional operand follows a repeatable one and could never be filled.
    #[error("optional operand '{optional}' follows repeatable operand '{repeatable}'")]
    AmbiguousOperands {
        repeatable: String,
        optional: String,
    },

    /// A modifier was applied where it has no meaning.
    #[error("invalid modifier on '{name}': {message}")]
    InvalidModifier { name: String, message: String },
}

/// A call's arguments do not satisfy a Specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    /// Too few positional values for the required operands.
    #[error(
        "missing required argument(s): {} (given {given}, expected at least {required})",
        .names.join(", ")
    )]
    MissingOperands {
        names: Vec<String>,
        given: usize,
        required: usize,
    },

    /// More positional values than the operands can absorb.
    #[error("too many arguments (given {given}, expected at most {max})")]
    TooManyArguments { given: usize, max: usize },

    /// A named argument matches no declared option or alias.
    #[error("unknown argument '{name}'")]
    UnknownArgument { name: String },

    /// The same option was supplied more than once.
    #[error("argument '{name}' supplied more than once")]
    DuplicateArgument { name: String },

    /// An option declared `required` resolved to nothing.
    #[error("required argument '{name}' was not supplied")]
    MissingRequired { name: String },

    /// `nil` supplied for a slot that forbids it.
    #[error("argument '{name}' does not accept nil")]
    ExplicitNil { name: String },

    /// Value of the wrong shape for the declared kind.
    #[error("argument '{name}' expects {expected}, got {actual}")]
    InvalidValue {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Two or more mutually exclusive names were supplied.
    #[error("conflicting arguments: {} cannot be used together", .names.join(", "))]
    Conflict { names: Vec<String> },

    /// A forbidden value combination was supplied.
    #[error(
        "conflicting values: {} cannot be {} together",
        .names.join(", "),
        .values.join(", ")
    )]
    ConflictingValues {
        names: Vec<String>,
        values: Vec<String>,
    },

    /// `name` was supplied without its companion.
    #[error("argument '{name}' requires '{requires}'")]
    MissingRequirement { name: String, requires: String },

    /// None of a set was supplied.
    #[error("at least one of {} is required", .names.join(", "))]
    RequiresOneOf { names: Vec<String> },

    /// Not exactly one of a set was supplied.
    #[error(
        "exactly one of {} is required ({} supplied)",
        .names.join(", "),
        .present.len()
    )]
    RequiresExactlyOneOf {
        names: Vec<String>,
        present: Vec<String>,
    },

    /// Value outside a closed set.
    #[error("invalid value '{value}' for '{name}' (allowed: {})", .allowed.join(", "))]
    DisallowedValue {
        name: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Several constraint violations from one bind.
    #[error("{}", .errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Violations { errors: Vec<ArgumentError> },
}

impl ArgumentError {
    /// Collapse a list of violations into a single error, if any.
    pub(crate) fn collect(mut errors: Vec<ArgumentError>) -> Option<ArgumentError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(ArgumentError::Violations { errors }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_single_is_unwrapped() {
        let err = ArgumentError::collect(vec![ArgumentError::UnknownArgument {
            name: "x".into(),
        }]);
        assert!(matches!(err, Some(ArgumentError::UnknownArgument { .. })));
    }

    #[test]
    fn collect_many_joins_messages() {
        let err = ArgumentError::collect(vec![
            ArgumentError::UnknownArgument { name: "x".into() },
            ArgumentError::UnknownArgument { name: "y".into() },
        ])
        .unwrap();
        assert_eq!(err.to_string(), "unknown argument 'x'; unknown argument 'y'");
    }

    #[test]
    fn exactly_one_message_counts_supplied() {
        let err = ArgumentError::RequiresExactlyOneOf {
            names: vec!["a".into(), "b".into()],
            present: vec![],
        };
        assert_eq!(err.to_string(), "exactly one of a, b is required (0 supplied)");
    }
}
