//! core::args::bind
//!
//! The binder: resolves a call's arguments against a [`Spec`] and produces
//! a [`Bound`] result.
//!
//! # Pipeline
//!
//! 1. Resolve named arguments (aliases included) to declared options and
//!    type-check them against the option kind.
//! 2. Allocate positional values onto operands.
//! 3. Apply declared defaults to everything not supplied.
//! 4. Check required options and evaluate every constraint.
//! 5. Render every declared item in declaration order.
//!
//! Any failure in steps 1-4 aborts the bind before a single token is
//! rendered.

use std::collections::BTreeMap;

use tracing::debug;

use super::allocate::{allocate, Slot};
use super::constraints::{validate, Resolution};
use super::error::ArgumentError;
use super::render::Renderer;
use super::spec::{Item, OptionKind, OptionSpec, Spec};
use super::value::{CallArgs, Value};

impl Spec {
    /// Bind a call's arguments against this specification.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgumentError`] for unknown or duplicated names, values of
    /// the wrong shape, operand arity mismatches, explicit `nil` where it is
    /// not allowed, missing required options, and constraint violations.
    pub fn bind(&self, args: CallArgs) -> Result<Bound<'_>, ArgumentError> {
        let items = self.items();
        let mut supplied: Vec<Option<Value>> = vec![None; items.len()];

        let (positional, named) = args.into_parts();

        for (name, value) in named {
            let index = match self.position(&name) {
                Some(i) => i,
                None => return Err(ArgumentError::UnknownArgument { name }),
            };
            let opt = match &items[index] {
                Item::Option(opt) => opt,
                _ => return Err(ArgumentError::UnknownArgument { name }),
            };
            if supplied[index].is_some() {
                return Err(ArgumentError::DuplicateArgument {
                    name: opt.name().to_string(),
                });
            }
            check_option_value(opt, &value)?;
            supplied[index] = Some(value);
        }

        let operand_indices: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| matches!(item, Item::Operand(_)))
            .map(|(i, _)| i)
            .collect();
        let operands: Vec<_> = self.operands().collect();
        let slots = allocate(&operands, positional)?;
        for (index, slot) in operand_indices.into_iter().zip(slots) {
            if let Slot::Filled(value) = slot {
                supplied[index] = Some(value);
            }
        }

        let mut values = Vec::with_capacity(items.len());
        let mut present = Vec::with_capacity(items.len());
        let mut errors = Vec::new();

        for (item, given) in items.iter().zip(supplied) {
            let is_present = given.as_ref().map_or(false, |v| counts_as_present(item, v));
            let value = match (item, given) {
                (_, Some(value)) => value,
                (Item::Literal(_), None) => Value::Nil,
                (Item::Option(opt), None) => opt.default_value().cloned().unwrap_or(Value::Nil),
                (Item::Operand(op), None) => match op.default_value() {
                    Some(default) => default.clone(),
                    None if op.is_repeatable() => Value::List(Vec::new()),
                    None => Value::Nil,
                },
            };
            if let Item::Option(opt) = item {
                if opt.is_required() && !value.is_truthy() && !is_present {
                    errors.push(ArgumentError::MissingRequired {
                        name: opt.name().to_string(),
                    });
                }
            }
            values.push(value);
            present.push(is_present);
        }

        let resolution = Resolution { values, present };
        errors.extend(validate(self, &resolution));
        if let Some(err) = ArgumentError::collect(errors) {
            return Err(err);
        }

        let mut renderer = Renderer::new();
        let tokens: Vec<String> = items
            .iter()
            .zip(&resolution.values)
            .flat_map(|(item, value)| renderer.render(item, value))
            .collect();

        debug!(tokens = ?tokens, "bound arguments");

        Ok(Bound {
            spec: self,
            tokens,
            values: resolution.values,
            present: resolution.present,
        })
    }
}

/// Shape check shared by call values and declared defaults.
pub(crate) fn check_option_value(opt: &OptionSpec, value: &Value) -> Result<(), ArgumentError> {
    let expected = match (opt.kind(), value) {
        (_, Value::Nil) => return Ok(()),
        (OptionKind::Custom(_) | OptionKind::ExecutionOnly, _) => return Ok(()),
        (OptionKind::Flag, Value::Bool(_)) => return Ok(()),
        (OptionKind::Flag, _) => "a boolean",
        (OptionKind::Value, Value::Str(_)) => return Ok(()),
        (OptionKind::Value, Value::List(_)) if opt.is_repeatable() => return Ok(()),
        (OptionKind::Value, _) if opt.is_repeatable() => "a string or list",
        (OptionKind::Value, _) => "a string",
        (OptionKind::FlagOrValue, Value::Bool(_) | Value::Str(_)) => return Ok(()),
        (OptionKind::FlagOrValue, _) => "a boolean or string",
        (OptionKind::KeyValue, Value::Map(_)) => return Ok(()),
        (OptionKind::KeyValue, _) => "a map",
    };
    Err(ArgumentError::InvalidValue {
        name: opt.name().to_string(),
        expected,
        actual: value.type_name(),
    })
}

fn counts_as_present(item: &Item, value: &Value) -> bool {
    match (item, value) {
        (Item::Option(opt), _)
            if matches!(opt.kind(), OptionKind::Custom(_) | OptionKind::ExecutionOnly) =>
        {
            !value.is_nil()
        }
        (Item::Option(opt), Value::Bool(false)) => opt.is_negatable(),
        _ => value.is_truthy(),
    }
}

/// The immutable result of one bind.
///
/// Holds the rendered tokens plus read access to every resolved value,
/// looked up by canonical name or alias.
#[derive(Debug, Clone)]
pub struct Bound<'s> {
    spec: &'s Spec,
    tokens: Vec<String>,
    values: Vec<Value>,
    present: Vec<bool>,
}

impl<'s> Bound<'s> {
    /// Tokens ready for the subprocess, in declaration order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    pub fn spec(&self) -> &'s Spec {
        self.spec
    }

    /// Resolved value for a declared name; `None` if the name is undeclared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.spec.position(name)?;
        Some(&self.values[index])
    }

    /// Like [`get`](Self::get) but reports undeclared names as errors.
    pub fn value(&self, name: &str) -> Result<&Value, ArgumentError> {
        self.get(name).ok_or_else(|| ArgumentError::UnknownArgument {
            name: name.to_string(),
        })
    }

    /// Boolean reader: true when the resolved value is truthy.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).map_or(false, Value::is_truthy)
    }

    /// Whether the caller explicitly supplied a meaningful value.
    pub fn is_present(&self, name: &str) -> bool {
        self.spec
            .position(name)
            .map_or(false, |i| self.present[i])
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Scalar or list value as a list of strings.
    pub fn list(&self, name: &str) -> Vec<&str> {
        self.get(name).map(Value::as_strs).unwrap_or_default()
    }

    /// Value of an execution-only option.
    pub fn execution_option(&self, name: &str) -> Option<&Value> {
        match self.spec.item(name)? {
            Item::Option(opt) if matches!(opt.kind(), OptionKind::ExecutionOnly) => {
                self.get(name).filter(|v| !v.is_nil())
            }
            _ => None,
        }
    }

    /// All non-nil execution-only values, keyed by canonical name.
    pub fn execution_options(&self) -> BTreeMap<&str, &Value> {
        self.spec
            .items()
            .iter()
            .zip(&self.values)
            .filter_map(|(item, value)| match item {
                Item::Option(opt)
                    if matches!(opt.kind(), OptionKind::ExecutionOnly) && !value.is_nil() =>
                {
                    Some((opt.name(), value))
                }
                _ => None,
            })
            .collect()
    }
}
