//! core::args::allocate
//!
//! Positional allocation: maps actual positional values onto declared
//! operand slots the way a dynamic language binds a parameter list with
//! required, defaulted and splat parameters.
//!
//! # Algorithm
//!
//! Slots are walked left to right while values are consumed left to right:
//!
//! - a required slot always takes the next value (a required repeatable slot
//!   takes at least one);
//! - an optional slot takes a value only if enough values remain for every
//!   later required slot;
//! - the repeatable slot takes every value not needed by later required slots,
//!   possibly none.
//!
//! Values left over after the walk are an arity error.

use super::error::ArgumentError;
use super::spec::OperandSpec;
use super::value::Value;

/// What one slot received from the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// No positional value reached this slot.
    Unfilled,
    /// The caller supplied this value (possibly `Value::Nil`).
    Filled(Value),
}

/// Allocate `values` onto `slots`.
///
/// Returns one [`Slot`] per declared operand, in declaration order. A filled
/// repeatable slot always holds a `Value::List`.
///
/// # Errors
///
/// - [`ArgumentError::MissingOperands`] when fewer values than required slots
/// - [`ArgumentError::TooManyArguments`] when values are left over
/// - [`ArgumentError::ExplicitNil`] when `nil` reaches a slot that forbids it
/// - [`ArgumentError::InvalidValue`] for booleans or maps
pub fn allocate(slots: &[&OperandSpec], values: Vec<Value>) -> Result<Vec<Slot>, ArgumentError> {
    let given = values.len();
    let required: Vec<&str> = slots
        .iter()
        .filter(|s| s.is_required())
        .map(|s| s.name())
        .collect();

    if given < required.len() {
        return Err(ArgumentError::MissingOperands {
            names: required[given..].iter().map(|s| s.to_string()).collect(),
            given,
            required: required.len(),
        });
    }

    // required_after[i]: required slots strictly after slot i
    let mut required_after = vec![0usize; slots.len()];
    let mut acc = 0;
    for (i, slot) in slots.iter().enumerate().rev() {
        required_after[i] = acc;
        if slot.is_required() {
            acc += 1;
        }
    }

    let mut values = values.into_iter();
    let mut remaining = given;
    let mut result = Vec::with_capacity(slots.len());

    for (i, slot) in slots.iter().enumerate() {
        let spare = remaining.saturating_sub(required_after[i]);
        let take = match (slot.is_required(), slot.is_repeatable()) {
            (true, false) => 1,
            (true, true) => spare.max(1),
            (false, true) => spare,
            (false, false) => usize::from(spare > 0),
        };
        remaining -= take;

        if slot.is_repeatable() {
            let taken: Vec<Value> = values.by_ref().take(take).collect();
            if take == 0 {
                result.push(Slot::Unfilled);
            } else {
                result.push(Slot::Filled(flatten(slot, taken)?));
            }
        } else if take == 1 {
            // `take` never exceeds what is left, so `next` is always Some here
            let value = values.next().unwrap_or(Value::Nil);
            check_scalar(slot, &value)?;
            result.push(Slot::Filled(value));
        } else {
            result.push(Slot::Unfilled);
        }
    }

    if remaining > 0 {
        return Err(ArgumentError::TooManyArguments {
            given,
            max: given - remaining,
        });
    }

    Ok(result)
}

fn check_scalar(slot: &OperandSpec, value: &Value) -> Result<(), ArgumentError> {
    match value {
        Value::Nil if !slot.allows_nil() => Err(ArgumentError::ExplicitNil {
            name: slot.name().to_string(),
        }),
        Value::Nil | Value::Str(_) | Value::List(_) => Ok(()),
        Value::Bool(_) | Value::Map(_) => Err(ArgumentError::InvalidValue {
            name: slot.name().to_string(),
            expected: "a string or list",
            actual: value.type_name(),
        }),
    }
}

/// Merge the values taken by a repeatable slot into one list.
fn flatten(slot: &OperandSpec, taken: Vec<Value>) -> Result<Value, ArgumentError> {
    let mut items = Vec::new();
    for value in taken {
        check_scalar(slot, &value)?;
        match value {
            Value::Str(s) => items.push(s),
            Value::List(list) => items.extend(list),
            _ => {}
        }
    }
    Ok(Value::List(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Value {
        Value::from(v)
    }

    fn filled(v: &str) -> Slot {
        Slot::Filled(s(v))
    }

    #[test]
    fn optional_then_required_with_one_value() {
        let old = OperandSpec::new("old");
        let new = OperandSpec::new("new").required();
        let slots = allocate(&[&old, &new], vec![s("x")]).unwrap();
        assert_eq!(slots, vec![Slot::Unfilled, filled("x")]);
    }

    #[test]
    fn optional_then_required_with_two_values() {
        let old = OperandSpec::new("old");
        let new = OperandSpec::new("new").required();
        let slots = allocate(&[&old, &new], vec![s("x"), s("y")]).unwrap();
        assert_eq!(slots, vec![filled("x"), filled("y")]);
    }

    #[test]
    fn missing_required_names_unmet_slots() {
        let a = OperandSpec::new("a").required();
        let b = OperandSpec::new("b").required();
        let err = allocate(&[&a, &b], vec![s("x")]).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::MissingOperands {
                names: vec!["b".into()],
                given: 1,
                required: 2,
            }
        );
    }

    #[test]
    fn surplus_values_rejected() {
        let a = OperandSpec::new("a");
        let err = allocate(&[&a], vec![s("x"), s("y")]).unwrap_err();
        assert_eq!(err, ArgumentError::TooManyArguments { given: 2, max: 1 });
    }

    #[test]
    fn repeatable_takes_what_later_required_slots_leave() {
        let sources = OperandSpec::new("sources").repeatable();
        let dest = OperandSpec::new("dest").required();
        let slots = allocate(&[&sources, &dest], vec![s("a"), s("b"), s("c")]).unwrap();
        assert_eq!(
            slots,
            vec![Slot::Filled(Value::list(["a", "b"])), filled("c")]
        );
    }

    #[test]
    fn repeatable_may_take_nothing() {
        let sources = OperandSpec::new("sources").repeatable();
        let dest = OperandSpec::new("dest").required();
        let slots = allocate(&[&sources, &dest], vec![s("c")]).unwrap();
        assert_eq!(slots, vec![Slot::Unfilled, filled("c")]);
    }

    #[test]
    fn repeatable_flattens_list_arguments() {
        let paths = OperandSpec::new("paths").repeatable();
        let slots = allocate(&[&paths], vec![Value::list(["a", "b"]), s("c")]).unwrap();
        assert_eq!(slots, vec![Slot::Filled(Value::list(["a", "b", "c"]))]);
    }

    #[test]
    fn required_repeatable_needs_one() {
        let paths = OperandSpec::new("paths").repeatable().required();
        let err = allocate(&[&paths], vec![]).unwrap_err();
        assert!(matches!(err, ArgumentError::MissingOperands { .. }));
    }

    #[test]
    fn explicit_nil_rejected_without_allow_nil() {
        let a = OperandSpec::new("commit").required();
        let err = allocate(&[&a], vec![Value::Nil]).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::ExplicitNil {
                name: "commit".into()
            }
        );
    }

    #[test]
    fn explicit_nil_accepted_with_allow_nil() {
        let a = OperandSpec::new("commit").allow_nil();
        let b = OperandSpec::new("path").required();
        let slots = allocate(&[&a, &b], vec![Value::Nil, s("p")]).unwrap();
        assert_eq!(slots, vec![Slot::Filled(Value::Nil), filled("p")]);
    }

    #[test]
    fn boolean_operand_rejected() {
        let a = OperandSpec::new("a");
        let err = allocate(&[&a], vec![Value::Bool(true)]).unwrap_err();
        assert!(matches!(err, ArgumentError::InvalidValue { .. }));
    }

    #[test]
    fn no_slots_no_values() {
        assert!(allocate(&[], vec![]).unwrap().is_empty());
    }
}
