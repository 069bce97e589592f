//! core::args::render
//!
//! Token rendering, one declared item at a time.
//!
//! | Kind            | Rendering                                          |
//! |-----------------|----------------------------------------------------|
//! | literal         | fixed tokens, always                               |
//! | flag            | `--x` for true, `--no-x` for false when negatable  |
//! | value           | `--x v` or `--x=v`, once per element if repeatable |
//! | flag_or_value   | `--x` for true, `--x v` for a scalar               |
//! | key_value       | `--x k=v` per pair                                 |
//! | custom          | whatever the declared function returns             |
//! | execution_only  | nothing                                            |
//! | operand         | separator (once per call), then the value(s)       |
//!
//! The binder has already type-checked values, so shapes a kind does not
//! accept simply render nothing here.

use std::collections::HashSet;

use super::spec::{Item, OperandSpec, OptionKind, OptionSpec};
use super::value::Value;

/// Tracks per-call rendering state shared across items.
#[derive(Debug, Default)]
pub struct Renderer {
    separators: HashSet<String>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one item with its resolved value.
    pub fn render(&mut self, item: &Item, value: &Value) -> Vec<String> {
        match item {
            Item::Literal(tokens) => tokens.clone(),
            Item::Option(opt) => render_option(opt, value),
            Item::Operand(op) => self.render_operand(op, value),
        }
    }

    fn render_operand(&mut self, op: &OperandSpec, value: &Value) -> Vec<String> {
        let values: Vec<String> = value.as_strs().into_iter().map(str::to_string).collect();
        if values.is_empty() {
            return values;
        }
        let mut tokens = Vec::with_capacity(values.len() + 1);
        if let Some(sep) = op.separator_token() {
            if self.separators.insert(sep.to_string()) {
                tokens.push(sep.to_string());
            }
        }
        tokens.extend(values);
        tokens
    }
}

/// Render a named option's value.
pub fn render_option(opt: &OptionSpec, value: &Value) -> Vec<String> {
    match opt.kind() {
        OptionKind::Flag => render_switch(opt, value).unwrap_or_default(),
        OptionKind::Value => value
            .as_strs()
            .into_iter()
            .flat_map(|v| with_value(opt, v))
            .collect(),
        OptionKind::FlagOrValue => match value {
            Value::Str(v) => with_value(opt, v),
            other => render_switch(opt, other).unwrap_or_default(),
        },
        OptionKind::KeyValue => match value {
            Value::Map(pairs) => pairs
                .iter()
                .flat_map(|(k, v)| with_value(opt, &format!("{}={}", k, v)))
                .collect(),
            _ => Vec::new(),
        },
        OptionKind::Custom(render) => {
            if value.is_nil() {
                Vec::new()
            } else {
                render(value)
            }
        }
        OptionKind::ExecutionOnly => Vec::new(),
    }
}

fn render_switch(opt: &OptionSpec, value: &Value) -> Option<Vec<String>> {
    match value.as_bool()? {
        true => Some(vec![opt.flag_token()]),
        false if opt.is_negatable() => Some(vec![opt.negated_token()]),
        false => None,
    }
}

fn with_value(opt: &OptionSpec, value: &str) -> Vec<String> {
    if opt.is_inline() {
        vec![format!("{}={}", opt.flag_token(), value)]
    } else {
        vec![opt.flag_token(), value.to_string()]
    }
}
