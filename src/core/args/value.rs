//! core::args::value
//!
//! Values supplied by callers and resolved by the binder.
//!
//! # Presence
//!
//! A name that does not appear in [`CallArgs`] at all is *not supplied*.
//! A name supplied as [`Value::Nil`] is *present but empty*: it suppresses
//! the declared default and renders nothing. Keeping the two apart is what
//! lets `Value::Bool(false)` on a negatable flag count as a real choice for
//! constraint evaluation.

use std::fmt;

use serde::Serialize;

/// A single argument value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicitly empty.
    Nil,
    /// Boolean switch.
    Bool(bool),
    /// Scalar rendered verbatim.
    Str(String),
    /// Ordered list of scalars.
    List(Vec<String>),
    /// Ordered key/value pairs.
    Map(Vec<(String, String)>),
}

impl Value {
    /// Build a list value from anything yielding strings.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map value, preserving pair order.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Whether the value renders to at least one token for a non-negatable item.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Str(_) => true,
            Value::List(items) => !items.is_empty(),
            Value::Map(pairs) => !pairs.is_empty(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Scalars as a one-element slice view, lists as-is.
    pub fn as_strs(&self) -> Vec<&str> {
        match self {
            Value::Str(s) => vec![s.as_str()],
            Value::List(items) => items.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Short type description used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
            Value::Map(pairs) => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

macro_rules! value_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Str(n.to_string())
                }
            }
        )*
    };
}

value_from_integer!(i32, i64, u32, u64, usize);

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::list(items)
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(items: [&str; N]) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Nil)
    }
}

/// The actual arguments of one call: ordered positionals plus named values.
///
/// # Example
///
/// ```
/// use gitbind::core::args::{CallArgs, Value};
///
/// let args = CallArgs::new()
///     .arg("old-name")
///     .arg("new-name")
///     .set("force", true);
/// assert_eq!(args.positional().len(), 2);
/// assert_eq!(args.named()[0].1, Value::Bool(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one positional value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a positional value only when `value` is `Some`.
    ///
    /// Unlike `arg(None)`, which supplies an explicit `nil`, this leaves the
    /// slot to the allocator.
    pub fn arg_opt<V: Into<Value>>(self, value: Option<V>) -> Self {
        match value {
            Some(v) => self.arg(v),
            None => self,
        }
    }

    /// Append several positional values, one per item.
    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    /// Supply a named value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }

    /// Supply a named value only when `value` is `Some`.
    pub fn set_opt<V: Into<Value>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Supply a boolean flag only when it is `true`.
    pub fn set_flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.set(name, true)
        } else {
            self
        }
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> &[(String, Value)] {
        &self.named
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, Vec<(String, Value)>) {
        (self.positional, self.named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
        assert!(Value::list(["a"]).is_truthy());
    }

    #[test]
    fn option_converts_to_nil() {
        let none: Option<&str> = None;
        assert_eq!(Value::from(none), Value::Nil);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn integers_become_strings() {
        assert_eq!(Value::from(5usize), Value::Str("5".into()));
        assert_eq!(Value::from(-3i64), Value::Str("-3".into()));
    }

    #[test]
    fn set_helpers_skip_absent_values() {
        let args = CallArgs::new()
            .set_flag("force", false)
            .set_opt::<&str>("track", None)
            .set_flag("quiet", true);
        assert_eq!(args.named().len(), 1);
        assert_eq!(args.named()[0].0, "quiet");
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::list(["a", "b"]).to_string(), "[a, b]");
        assert_eq!(Value::map([("k", "v")]).to_string(), "{k=v}");
        assert_eq!(Value::Nil.to_string(), "nil");
    }
}
