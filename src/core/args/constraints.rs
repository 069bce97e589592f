//! core::args::constraints
//!
//! Cross-option rule evaluation.
//!
//! Rules see *presence*, not resolved values: a name is present when the
//! caller supplied it with a meaningful value. Declared defaults never make
//! a name present. An explicit `false` on a negatable flag is present since
//! it renders `--no-<name>`. Custom and execution-only options are present
//! for any non-nil value.
//!
//! Every rule is evaluated; all violations are returned together so the
//! caller sees the whole mistake at once.

use super::error::ArgumentError;
use super::spec::{Constraint, Spec};
use super::value::Value;

/// Per-item state produced by the binder, indexed like `Spec::items`.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub values: Vec<Value>,
    pub present: Vec<bool>,
}

impl Resolution {
    fn index(&self, spec: &Spec, name: &str) -> Option<usize> {
        spec.position(name)
    }

    pub fn is_present(&self, spec: &Spec, name: &str) -> bool {
        self.index(spec, name)
            .map(|i| self.present[i])
            .unwrap_or(false)
    }

    pub fn value<'a>(&'a self, spec: &Spec, name: &str) -> Option<&'a Value> {
        self.index(spec, name).map(|i| &self.values[i])
    }
}

/// Evaluate every constraint of `spec` against `resolution`.
pub fn validate(spec: &Spec, resolution: &Resolution) -> Vec<ArgumentError> {
    let mut errors = Vec::new();
    for constraint in spec.constraints() {
        if let Some(err) = check(spec, resolution, constraint) {
            errors.push(err);
        }
    }
    errors
}

fn check(spec: &Spec, res: &Resolution, constraint: &Constraint) -> Option<ArgumentError> {
    let present = |name: &String| res.is_present(spec, name);

    match constraint {
        Constraint::Conflicts { names } => {
            let supplied: Vec<String> = names.iter().filter(|&n| present(n)).cloned().collect();
            (supplied.len() > 1).then_some(ArgumentError::Conflict { names: supplied })
        }

        Constraint::ConflictingValues { names, tuples } => {
            if !names.iter().all(present) {
                return None;
            }
            let actual: Vec<&Value> = names
                .iter()
                .filter_map(|n| res.value(spec, n))
                .collect();
            tuples
                .iter()
                .find(|tuple| {
                    tuple.len() == actual.len()
                        && tuple.iter().zip(&actual).all(|(want, got)| want == *got)
                })
                .map(|tuple| ArgumentError::ConflictingValues {
                    names: names.clone(),
                    values: tuple.iter().map(|v| v.to_string()).collect(),
                })
        }

        Constraint::Requires {
            name,
            requires,
            when,
        } => {
            if !present(name) || present(requires) {
                return None;
            }
            let guard = match (when, res.value(spec, name)) {
                (Some(predicate), Some(value)) => predicate(value),
                _ => true,
            };
            guard.then(|| ArgumentError::MissingRequirement {
                name: name.clone(),
                requires: requires.clone(),
            })
        }

        Constraint::RequiresOneOf { names } => (!names.iter().any(present))
            .then(|| ArgumentError::RequiresOneOf {
                names: names.clone(),
            }),

        Constraint::RequiresExactlyOneOf { names } => {
            let supplied: Vec<String> = names.iter().filter(|&n| present(n)).cloned().collect();
            (supplied.len() != 1).then(|| ArgumentError::RequiresExactlyOneOf {
                names: names.clone(),
                present: supplied,
            })
        }

        Constraint::AllowedValues { name, values } => {
            if !present(name) {
                return None;
            }
            let value = res.value(spec, name)?;
            value
                .as_strs()
                .into_iter()
                .find(|v| !values.iter().any(|allowed| allowed.as_str() == *v))
                .map(|bad| ArgumentError::DisallowedValue {
                    name: name.clone(),
                    value: bad.to_string(),
                    allowed: values.clone(),
                })
        }
    }
}
