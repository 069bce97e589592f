//! render command - Show the git arguments a definition produces
//!
//! Command-line values are strings, so their shape is taken from the
//! declaration: repeatable value options and repeated `--set`s become lists,
//! key/value options take `key=value` pairs.

use anyhow::{anyhow, bail, Result};
use serde_json::json;

use crate::commands::lookup;
use crate::core::args::{CallArgs, Item, OptionKind, OptionSpec, Spec, Value};
use crate::exec::display_command;

/// Bind and print without running anything.
pub fn render(
    command: &str,
    operands: &[String],
    sets: &[String],
    flags: &[String],
    negated: &[String],
    json: bool,
) -> Result<()> {
    let def = lookup(command)
        .ok_or_else(|| anyhow!("unknown definition '{}' (see `gitbind commands`)", command))?;
    let spec = def.spec();
    let bound = spec.bind(build_args(spec, operands, sets, flags, negated)?)?;

    if json {
        let out = json!({
            "tokens": bound.tokens(),
            "execution": bound.execution_options(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", display_command("git", bound.tokens()));
    }
    Ok(())
}

/// Turn command-line strings into call arguments for `spec`.
pub(crate) fn build_args(
    spec: &Spec,
    operands: &[String],
    sets: &[String],
    flags: &[String],
    negated: &[String],
) -> Result<CallArgs> {
    let mut args = CallArgs::new().args(operands.iter().map(String::as_str));

    let mut grouped: Vec<(&str, Vec<String>)> = Vec::new();
    for entry in sets {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("--set expects NAME=VALUE, got '{}'", entry))?;
        match grouped.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value.to_string()),
            None => grouped.push((name, vec![value.to_string()])),
        }
    }

    for (name, values) in grouped {
        let value = match spec.item(name) {
            Some(Item::Option(opt)) => shape(opt, values)?,
            // undeclared names are left for the binder to report
            _ => single(values),
        };
        args = args.set(name, value);
    }
    for name in flags {
        args = args.set(name.as_str(), true);
    }
    for name in negated {
        args = args.set(name.as_str(), false);
    }
    Ok(args)
}

fn shape(opt: &OptionSpec, values: Vec<String>) -> Result<Value> {
    match opt.kind() {
        OptionKind::KeyValue => {
            let mut pairs = Vec::with_capacity(values.len());
            for entry in &values {
                match entry.split_once('=') {
                    Some((key, value)) => pairs.push((key, value)),
                    None => bail!("'{}' expects KEY=VALUE pairs, got '{}'", opt.name(), entry),
                }
            }
            Ok(Value::map(pairs))
        }
        OptionKind::Value if opt.is_repeatable() => Ok(Value::List(values)),
        _ => Ok(single(values)),
    }
}

fn single(mut values: Vec<String>) -> Value {
    if values.len() == 1 {
        Value::Str(values.remove(0))
    } else {
        Value::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{history, index, remote};
    use crate::core::args::ArgumentError;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn repeatable_value_becomes_list() {
        let spec = history::log();
        let args = build_args(spec, &[], &strings(&["grep=a", "format=%H"]), &[], &[]).unwrap();
        let bound = spec.bind(args).unwrap();
        assert_eq!(bound.tokens(), ["log", "--format=%H", "--grep=a"]);
    }

    #[test]
    fn key_value_pairs() {
        let spec = remote::clone();
        let args = build_args(
            spec,
            &strings(&["src"]),
            &strings(&["config=a.b=1", "config=c.d=2"]),
            &[],
            &[],
        )
        .unwrap();
        let bound = spec.bind(args).unwrap();
        assert_eq!(
            bound.tokens(),
            ["clone", "--config", "a.b=1", "--config", "c.d=2", "src"]
        );
    }

    #[test]
    fn flags_and_negations() {
        let spec = index::commit();
        let args = build_args(
            spec,
            &[],
            &strings(&["m=msg"]),
            &strings(&["amend"]),
            &strings(&["verify"]),
        )
        .unwrap();
        let bound = spec.bind(args).unwrap();
        assert_eq!(
            bound.tokens(),
            ["commit", "--amend", "--no-verify", "--message", "msg"]
        );
    }

    #[test]
    fn repeated_scalar_is_rejected_by_binder() {
        let spec = index::commit();
        let args = build_args(spec, &[], &strings(&["message=a", "message=b"]), &[], &[]).unwrap();
        let err = spec.bind(args).unwrap_err();
        assert!(matches!(err, ArgumentError::InvalidValue { .. }));
    }

    #[test]
    fn malformed_set() {
        assert!(build_args(history::log(), &[], &strings(&["nope"]), &[], &[]).is_err());
    }
}
